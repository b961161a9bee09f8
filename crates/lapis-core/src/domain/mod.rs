// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Lapis.
//!
//! This module contains pure logic: endpoint metadata, identifier
//! derivation, the descriptor and source stub documents, and the engine that
//! renders them. All I/O and prompting is handled via ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or network access
//! - **Deterministic**: Rendering is a pure function of its input
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod engine;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use engine::{generate, render_descriptor, render_source_stub};
pub use entities::{
    descriptor::{DescriptorDocument, DescriptorMetadata},
    generated::{DESCRIPTOR_FILE, FileToWrite, GeneratedEndpoint, SOURCE_STUB_FILE},
    identifier::{TypeIdentifier, binding_name},
    metadata::{
        DEFAULT_VERSION, EndpointMetadata, EndpointMetadataBuilder, normalize_name, parse_tags,
    },
    template::{RenderContext, SOURCE_STUB_TEMPLATE, SourceStubDocument},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CacheSettings, HttpMethod};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_rejects_unsafe_name() {
        assert!(DomainValidator::validate_name("weather").is_ok());
        assert!(DomainValidator::validate_name("").is_err());
        assert!(DomainValidator::validate_name("two words").is_err());
    }

    #[test]
    fn validator_checks_directly_built_metadata() {
        let metadata = EndpointMetadata {
            name: "bad-name".into(),
            version: DEFAULT_VERSION.into(),
            description: String::new(),
            tags: Vec::new(),
            method: HttpMethod::Get,
            cache: CacheSettings::default(),
        };
        assert!(matches!(
            DomainValidator::validate_metadata(&metadata),
            Err(DomainError::InvalidEndpointName { .. })
        ));
    }

    #[test]
    fn generated_bundle_passes_structural_validation() {
        let metadata = EndpointMetadata::builder().name("weather").build().unwrap();
        let generated = generate(&metadata).unwrap();
        assert!(DomainValidator::validate_generated(&generated).is_ok());
        assert_eq!(generated.file_count(), 2);
    }

    #[test]
    fn invalid_name_suggestions_are_actionable() {
        let err = DomainValidator::validate_name("user-profile").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("underscore")));
    }

    #[test]
    fn invalid_method_suggestion_lists_all_methods() {
        let err: DomainError = "TRACE".parse::<HttpMethod>().unwrap_err();
        let suggestions = err.suggestions();
        assert!(suggestions[0].contains("GET, POST, PUT, DELETE, PATCH"));
    }
}
