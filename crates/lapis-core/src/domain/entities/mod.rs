pub mod descriptor;
pub mod generated;
pub mod identifier;
pub mod metadata;
pub mod template;

pub use crate::domain::DomainError;
pub use descriptor::DescriptorDocument;
pub use generated::GeneratedEndpoint;
pub use metadata::EndpointMetadata;
pub use template::SourceStubDocument;
