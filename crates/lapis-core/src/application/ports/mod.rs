//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `lapis-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory creation and file writes
//!   - `Prompter`: Interactive questions and progress reports

pub mod output;

pub use output::{Filesystem, Prompter};

#[cfg(test)]
pub use output::MockFilesystem;
