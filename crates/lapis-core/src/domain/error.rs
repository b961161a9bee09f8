// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so collectors can report and re-prompt)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid endpoint name '{name}': {reason}")]
    InvalidEndpointName { name: String, reason: String },

    #[error("Unknown HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid cache TTL '{0}': expected a non-negative whole number of seconds")]
    InvalidTtl(String),

    // ========================================================================
    // Internal
    // ========================================================================
    #[error("Failed to encode descriptor: {0}")]
    Serialization(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEndpointName { .. } => vec![
                "Use letters, digits and underscores only".into(),
                "Start with a letter or underscore".into(),
                "Examples: weather, orders, user_profile".into(),
            ],
            Self::InvalidMethod(_) => vec![format!(
                "Supported methods: {}",
                crate::domain::HttpMethod::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )],
            Self::InvalidTtl(_) => vec![
                "Enter the TTL as whole seconds, e.g. 60".into(),
                "Use 0 to expire cached responses immediately".into(),
            ],
            Self::Serialization(_) => vec!["This is a bug, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEndpointName { .. } | Self::InvalidMethod(_) | Self::InvalidTtl(_) => {
                ErrorCategory::Validation
            }
            Self::Serialization(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
