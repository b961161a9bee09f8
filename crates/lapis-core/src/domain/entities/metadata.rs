//! The `EndpointMetadata` aggregate and its typestate builder.
//!
//! `EndpointMetadata` is the single record the collector hands to the
//! template engine. The builder normalizes user input (lower-cased name,
//! trimmed tags) and rejects names that cannot double as a path segment and
//! an identifier.
//!
//! # Typestate builder
//!
//! Two phantom markers (`NoName` / `HasName`) enforce at compile time that a
//! name is supplied before `build()` becomes available.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::marker::PhantomData;

use crate::domain::{
    error::DomainError,
    value_objects::{CacheSettings, HttpMethod},
};

/// Version recorded when the user accepts the default.
pub const DEFAULT_VERSION: &str = "1.0.0";

// ── Aggregate ─────────────────────────────────────────────────────────────────

/// Everything needed to render an endpoint's descriptor and source stub.
///
/// Fields are public: the engine is total over any value of this type, and
/// tests construct odd values directly. Values coming from users should go
/// through [`EndpointMetadata::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub tags: Vec<String>,
    pub method: HttpMethod,
    pub cache: CacheSettings,
}

impl EndpointMetadata {
    /// Start building metadata from user input.
    pub fn builder() -> EndpointMetadataBuilder<NoName> {
        EndpointMetadataBuilder::new()
    }

    /// Validate the name invariant.
    ///
    /// Called by the builder. Available for re-validation of directly
    /// constructed values.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)
    }
}

impl fmt::Display for EndpointMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /api/{} (v{})", self.method, self.name, self.version)
    }
}

// ── Normalization helpers ─────────────────────────────────────────────────────

/// Lower-case and trim a raw endpoint name.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a comma-separated tag list, trimming each element.
///
/// Blank input yields no tags at all rather than a single empty tag. Order
/// is preserved and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Check that a normalized name is usable as both a directory name and the
/// seed of a TypeScript identifier.
///
/// Rules: non-empty, first character an ASCII letter or `_`, remaining
/// characters ASCII alphanumeric or `_`.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidEndpointName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("name cannot be empty"));
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid("name must start with a letter or underscore"));
    }

    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }

    Ok(())
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: name has not yet been set.
pub struct NoName;
/// Marker: name has been set; `build()` is available.
pub struct HasName;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`EndpointMetadata`].
pub struct EndpointMetadataBuilder<N> {
    name: String,
    version: Option<String>,
    description: String,
    tags: Vec<String>,
    method: HttpMethod,
    cache: CacheSettings,
    _marker: PhantomData<N>,
}

impl EndpointMetadataBuilder<NoName> {
    fn new() -> Self {
        Self {
            name: String::new(),
            version: None,
            description: String::new(),
            tags: Vec::new(),
            method: HttpMethod::default(),
            cache: CacheSettings::default(),
            _marker: PhantomData,
        }
    }

    /// Set the endpoint name. Input is trimmed and lower-cased.
    pub fn name(self, name: impl AsRef<str>) -> EndpointMetadataBuilder<HasName> {
        EndpointMetadataBuilder {
            name: normalize_name(name.as_ref()),
            version: self.version,
            description: self.description,
            tags: self.tags,
            method: self.method,
            cache: self.cache,
            _marker: PhantomData,
        }
    }
}

impl<N> EndpointMetadataBuilder<N> {
    /// Set the version. Blank input falls back to [`DEFAULT_VERSION`].
    pub fn version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        let version = version.trim();
        self.version = (!version.is_empty()).then(|| version.to_string());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set tags from a raw comma-separated list.
    pub fn tags_csv(mut self, raw: &str) -> Self {
        self.tags = parse_tags(raw);
        self
    }

    /// Set tags from already-split values; each is trimmed.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .collect();
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn cache(mut self, enabled: bool, ttl_seconds: u32) -> Self {
        self.cache = CacheSettings::new(enabled, ttl_seconds);
        self
    }
}

impl EndpointMetadataBuilder<HasName> {
    /// Finish building, validating the name.
    pub fn build(self) -> Result<EndpointMetadata, DomainError> {
        let metadata = EndpointMetadata {
            name: self.name,
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            description: self.description,
            tags: self.tags,
            method: self.method,
            cache: self.cache,
        };
        metadata.validate()?;
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let m = EndpointMetadata::builder().name("weather").build().unwrap();
        assert_eq!(m.name, "weather");
        assert_eq!(m.version, "1.0.0");
        assert_eq!(m.description, "");
        assert!(m.tags.is_empty());
        assert_eq!(m.method, HttpMethod::Get);
        assert_eq!(m.cache, CacheSettings::new(false, 60));
    }

    #[test]
    fn builder_normalizes_name() {
        let m = EndpointMetadata::builder()
            .name("  Weather ")
            .build()
            .unwrap();
        assert_eq!(m.name, "weather");
    }

    #[test]
    fn blank_version_falls_back_to_default() {
        let m = EndpointMetadata::builder()
            .name("orders")
            .version("   ")
            .build()
            .unwrap();
        assert_eq!(m.version, DEFAULT_VERSION);
    }

    #[test]
    fn tags_keep_input_order() {
        assert_eq!(parse_tags("b, a, c"), ["b", "a", "c"]);
    }

    #[test]
    fn blank_tags_yield_empty_list() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("   ").is_empty());
    }

    #[test]
    fn tags_are_trimmed_individually() {
        assert_eq!(parse_tags(" retail ,internal  "), ["retail", "internal"]);
    }

    #[test]
    fn builder_tags_from_iterator_are_trimmed() {
        let m = EndpointMetadata::builder()
            .name("orders")
            .tags([" a", "b "])
            .build()
            .unwrap();
        assert_eq!(m.tags, ["a", "b"]);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = EndpointMetadata::builder().name("   ").build().unwrap_err();
        assert!(matches!(err, DomainError::InvalidEndpointName { .. }));
    }

    #[test]
    fn unsafe_names_are_rejected() {
        for name in ["user-profile", "../etc", "a/b", "9lives", "has space", "café"] {
            assert!(validate_name(name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn identifier_safe_names_pass() {
        for name in ["weather", "orders", "user_profile", "_internal", "v2"] {
            assert!(validate_name(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn display_summarizes_route() {
        let m = EndpointMetadata::builder()
            .name("orders")
            .method(HttpMethod::Post)
            .version("2.0.0")
            .build()
            .unwrap();
        assert_eq!(m.to_string(), "POST /api/orders (v2.0.0)");
    }
}
