use crate::domain::{
    entities::{EndpointMetadata, GeneratedEndpoint, metadata::validate_name},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        validate_name(name)
    }

    pub fn validate_metadata(metadata: &EndpointMetadata) -> Result<(), DomainError> {
        metadata.validate()
    }

    pub fn validate_generated(generated: &GeneratedEndpoint) -> Result<(), DomainError> {
        generated.validate()
    }
}
