//! Infrastructure adapters for Lapis.
//!
//! This crate implements the ports defined in `lapis-core::application::ports`.
//! It contains all I/O: filesystem writes and line-oriented prompting.

pub mod filesystem;
pub mod prompter;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompter::{LinePrompter, ScriptedPrompter};
