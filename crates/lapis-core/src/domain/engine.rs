//! Template generation engine.
//!
//! Pure functions from [`EndpointMetadata`] to the two output documents.
//! No I/O, no validation of its own: any metadata value renders, including
//! an empty name. Output is byte-identical for identical input.

use crate::domain::{
    entities::{
        descriptor::DescriptorDocument,
        generated::{DESCRIPTOR_FILE, GeneratedEndpoint, SOURCE_STUB_FILE},
        metadata::EndpointMetadata,
        template::SourceStubDocument,
    },
    error::DomainError,
};

/// Build the `config.json` descriptor.
pub fn render_descriptor(metadata: &EndpointMetadata) -> DescriptorDocument {
    DescriptorDocument::from_metadata(metadata)
}

/// Build the `index.ts` stub.
pub fn render_source_stub(metadata: &EndpointMetadata) -> SourceStubDocument {
    SourceStubDocument::render(metadata)
}

/// Render both documents into a bundle ready for the writer.
///
/// The descriptor comes first so it is written first.
pub fn generate(metadata: &EndpointMetadata) -> Result<GeneratedEndpoint, DomainError> {
    let descriptor = render_descriptor(metadata).to_json_pretty()?;
    let stub = render_source_stub(metadata).into_string();

    Ok(GeneratedEndpoint::new(metadata.name.as_str())
        .with_file(DESCRIPTOR_FILE, descriptor)
        .with_file(SOURCE_STUB_FILE, stub))
}
