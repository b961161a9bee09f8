//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the ports the
//! application drives, not domain rules. Domain errors are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The prompter could not read an answer.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Input ended before every question was answered.
    #[error("Input closed before all answers were given")]
    InputClosed,

    /// Adapter state access failed (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run lapis from the project root (it writes under src/apis)".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run lapis from an interactive terminal".into(),
                "Or pipe one answer per line on stdin".into(),
            ],
            Self::InputClosed => vec![
                "Answer every prompt; blank lines accept the default".into(),
                "No files were written".into(),
            ],
            Self::StoreLockError => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::InputClosed => ErrorCategory::Validation,
        }
    }
}
