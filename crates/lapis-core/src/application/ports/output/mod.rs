//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `lapis-adapters` crate provides implementations; the CLI adds a
//! terminal prompter.

use crate::error::LapisResult;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `lapis_adapters::filesystem::LocalFilesystem` (production)
/// - `lapis_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it
    /// already exists.
    fn create_dir_all(&self, path: &Path) -> LapisResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> LapisResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for interactive input and progress output.
///
/// Implemented by:
/// - `lapis_adapters::prompter::LinePrompter` (line-oriented stdin/stdout)
/// - `lapis_adapters::prompter::ScriptedPrompter` (testing)
/// - `lapis-cli`'s `TerminalPrompter` (dialoguer widgets)
pub trait Prompter: Send + Sync {
    /// Ask for free text. An empty answer yields `default` when one is given.
    fn ask_text(&self, prompt: &str, default: Option<&str>) -> LapisResult<String>;

    /// Ask the user to pick one of `choices`; returns the chosen index.
    fn ask_choice(&self, prompt: &str, choices: &[&str], default: usize) -> LapisResult<usize>;

    /// Ask a yes/no question.
    fn ask_boolean(&self, prompt: &str, default: bool) -> LapisResult<bool>;

    /// Show a message to the user.
    fn report(&self, message: &str) -> LapisResult<()>;
}
