//! Source stub template and the substitution context that fills it.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SOURCE_STUB_TEMPLATE (static text)                         │
//! │  └── {{TYPE_IDENT}}, {{ENDPOINT_NAME}}, {{HTTP_METHOD}} ... │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{ENDPOINT_NAME}} -> "orders"   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SourceStubDocument                                         │
//! │  └── Rendered `index.ts` text                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Substitution is textual. Values are interpolated verbatim, without
//! escaping, and the emitted TypeScript is never parsed or checked.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::{
    identifier::{TypeIdentifier, binding_name},
    metadata::EndpointMetadata,
};

/// Placeholder names understood by [`SOURCE_STUB_TEMPLATE`].
pub mod vars {
    pub const ENDPOINT_NAME: &str = "ENDPOINT_NAME";
    pub const TYPE_IDENT: &str = "TYPE_IDENT";
    pub const BINDING_NAME: &str = "BINDING_NAME";
    pub const HTTP_METHOD: &str = "HTTP_METHOD";
    pub const CACHE_ENABLED: &str = "CACHE_ENABLED";
    pub const CACHE_TTL_SECONDS: &str = "CACHE_TTL_SECONDS";
}

/// The `index.ts` skeleton for a new endpoint module.
///
/// The handler always throws and the validator always accepts; both are
/// meant to be replaced by hand.
pub const SOURCE_STUB_TEMPLATE: &str = r#"import { APIEndpointConfig, APIModule } from "../../types/api";

interface {{TYPE_IDENT}}Params {
    // TODO: Define your parameters here
}

interface {{TYPE_IDENT}}Response {
    // TODO: Define your response type here
}

const config: APIEndpointConfig<{{TYPE_IDENT}}Params, {{TYPE_IDENT}}Response> = {
    path: '/api/{{ENDPOINT_NAME}}',
    method: '{{HTTP_METHOD}}',
    cache: {
        enabled: {{CACHE_ENABLED}},
        ttlSeconds: {{CACHE_TTL_SECONDS}}
    },
    handler: async (params) => {
        // TODO: Implement your API logic here
        throw new Error("Not implemented");
    }
};

const validate = async (params: unknown): Promise<boolean> => {
    // TODO: Implement parameter validation
    return true;
};

const {{BINDING_NAME}}: APIModule<{{TYPE_IDENT}}Params, {{TYPE_IDENT}}Response> = {
    config,
    validate
};

export = {{BINDING_NAME}};
"#;

/// Context for template rendering.
///
/// A **Value Object** holding every placeholder value for one endpoint.
/// Immutable after creation; `with_variable` returns a new context.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `ENDPOINT_NAME` | "orders" | `metadata.name` |
/// | `TYPE_IDENT` | "Orders" | Derived |
/// | `BINDING_NAME` | "ordersAPI" | Derived |
/// | `HTTP_METHOD` | "POST" | `metadata.method` |
/// | `CACHE_ENABLED` | "true" | `metadata.cache.enabled` |
/// | `CACHE_TTL_SECONDS` | "30" | `metadata.cache.ttl_seconds` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Empty context; every placeholder renders verbatim.
    pub fn new() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    /// Build the context for one endpoint, deriving identifier variables.
    pub fn for_endpoint(metadata: &EndpointMetadata) -> Self {
        let ident = TypeIdentifier::derive(&metadata.name);

        Self::new()
            .with_variable(vars::ENDPOINT_NAME, metadata.name.as_str())
            .with_variable(vars::TYPE_IDENT, ident.as_str())
            .with_variable(vars::BINDING_NAME, binding_name(&metadata.name))
            .with_variable(vars::HTTP_METHOD, metadata.method.as_str())
            .with_variable(vars::CACHE_ENABLED, metadata.cache.enabled.to_string())
            .with_variable(
                vars::CACHE_TTL_SECONDS,
                metadata.cache.ttl_seconds.to_string(),
            )
    }

    /// Add or override a variable, consuming self.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// One left-to-right pass: substituted values are copied out and never
    /// scanned again, so a value containing `{{...}}` lands verbatim.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{ENDPOINT_NAME}}{{ENDPOINT_NAME}}` → both replaced
    /// - unterminated `{{` → copied as-is
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            match self.variables.get(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    // Keep the braces and resume inside them.
                    out.push_str("{{");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendered `index.ts` contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStubDocument(String);

impl SourceStubDocument {
    pub fn render(metadata: &EndpointMetadata) -> Self {
        Self(RenderContext::for_endpoint(metadata).render(SOURCE_STUB_TEMPLATE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SourceStubDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceStubDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
