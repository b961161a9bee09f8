//! Domain value objects: HttpMethod, CacheSettings.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── HttpMethod ───────────────────────────────────────────────────────────────

/// HTTP method an endpoint answers to.
///
/// The set is closed; the collector offers exactly these choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Every method, in the order the collector presents them.
    pub const ALL: [HttpMethod; 5] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Position of this method in [`Self::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            other => Err(DomainError::InvalidMethod(other.to_string())),
        }
    }
}

// ── CacheSettings ────────────────────────────────────────────────────────────

/// Response caching for a generated endpoint.
///
/// Only embedded in the source stub, never in the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl_seconds: u32,
}

impl CacheSettings {
    pub const DEFAULT_TTL_SECONDS: u32 = 60;

    pub const fn new(enabled: bool, ttl_seconds: u32) -> Self {
        Self {
            enabled,
            ttl_seconds,
        }
    }

    /// Parse a TTL as typed by a user: trimmed, whole seconds, non-negative.
    pub fn parse_ttl(input: &str) -> Result<u32, DomainError> {
        input
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::InvalidTtl(input.trim().to_string()))
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::new(false, Self::DEFAULT_TTL_SECONDS)
    }
}
