//! Lapis Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Lapis
//! endpoint scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            lapis-cli (CLI)              │
//! │   (TerminalPrompter, wiring, output)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (MetadataCollector, EndpointService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Filesystem, Prompter)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     lapis-adapters (Infrastructure)     │
//! │ (LocalFilesystem, LinePrompter, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (EndpointMetadata, template engine)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lapis_core::domain::{EndpointMetadata, HttpMethod, generate};
//!
//! let metadata = EndpointMetadata::builder()
//!     .name("weather")
//!     .method(HttpMethod::Get)
//!     .tags_csv("public, forecast")
//!     .build()
//!     .unwrap();
//!
//! let generated = generate(&metadata).unwrap();
//! assert!(generated.source_stub().unwrap().contains("export = weatherAPI;"));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        APIS_DIR, CollectorDefaults, EndpointService, MetadataCollector, ScaffoldReport,
        ports::{Filesystem, Prompter},
    };
    pub use crate::domain::{
        CacheSettings, DescriptorDocument, EndpointMetadata, GeneratedEndpoint, HttpMethod,
        SourceStubDocument, TypeIdentifier, generate, render_descriptor, render_source_stub,
    };
    pub use crate::error::{LapisError, LapisResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
