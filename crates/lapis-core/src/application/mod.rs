//! Application layer for Lapis.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (MetadataCollector, EndpointService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rendering logic itself. The template engine lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    APIS_DIR, CollectorDefaults, EndpointService, MetadataCollector, ScaffoldReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Prompter};

pub use error::ApplicationError;
