//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! halves of the workflow: collecting metadata and writing the endpoint.

pub mod collector;
pub mod endpoint_service;

pub use collector::{CollectorDefaults, MetadataCollector};
pub use endpoint_service::{APIS_DIR, EndpointService, ScaffoldReport};
