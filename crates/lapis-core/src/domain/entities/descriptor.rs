//! The descriptor document written as `config.json`.
//!
//! A fixed-shape record: field order here is the key order in the emitted
//! JSON. Cache settings are deliberately absent.

use serde::{Deserialize, Serialize};

use crate::domain::{entities::metadata::EndpointMetadata, error::DomainError};

/// `{ "enabled": true, "metadata": { ... } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorDocument {
    pub enabled: bool,
    pub metadata: DescriptorMetadata,
}

/// The `metadata` object inside a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl DescriptorDocument {
    /// Build the descriptor for an endpoint. Always enabled.
    pub fn from_metadata(metadata: &EndpointMetadata) -> Self {
        Self {
            enabled: true,
            metadata: DescriptorMetadata {
                name: metadata.name.clone(),
                version: metadata.version.clone(),
                description: metadata.description.clone(),
                tags: metadata.tags.clone(),
            },
        }
    }

    /// Encode as JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::Serialization(e.to_string()))
    }
}

impl From<&EndpointMetadata> for DescriptorDocument {
    fn from(metadata: &EndpointMetadata) -> Self {
        Self::from_metadata(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HttpMethod;

    fn sample() -> EndpointMetadata {
        EndpointMetadata::builder()
            .name("orders")
            .version("2.0.0")
            .description("Order lookup")
            .tags_csv("retail, internal")
            .method(HttpMethod::Post)
            .cache(true, 30)
            .build()
            .unwrap()
    }

    #[test]
    fn json_has_exact_shape() {
        let json = DescriptorDocument::from(&sample()).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "enabled": true,
                "metadata": {
                    "name": "orders",
                    "version": "2.0.0",
                    "description": "Order lookup",
                    "tags": ["retail", "internal"]
                }
            })
        );
    }

    #[test]
    fn json_is_two_space_indented_in_field_order() {
        let json = DescriptorDocument::from(&sample()).to_json_pretty().unwrap();
        let expected = r#"{
  "enabled": true,
  "metadata": {
    "name": "orders",
    "version": "2.0.0",
    "description": "Order lookup",
    "tags": [
      "retail",
      "internal"
    ]
  }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn cache_settings_are_not_recorded() {
        let json = DescriptorDocument::from(&sample()).to_json_pretty().unwrap();
        assert!(!json.contains("cache"));
        assert!(!json.contains("ttl"));
    }

    #[test]
    fn empty_tags_serialize_as_empty_array() {
        let m = EndpointMetadata::builder().name("ping").build().unwrap();
        let json = DescriptorDocument::from(&m).to_json_pretty().unwrap();
        assert!(json.contains(r#""tags": []"#));
    }
}
