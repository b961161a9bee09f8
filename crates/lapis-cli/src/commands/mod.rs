//! Command handlers. Each translates parsed arguments into core calls and
//! prints the outcome.

pub mod completions;
pub mod create;
pub mod init;
