//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`CollectorDefaults`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `LAPIS_DEFAULTS__METHOD=post`
//! 3. Config file: `--config <FILE>`, else the platform config dir, else
//!    `.lapis.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use lapis_core::{
    application::CollectorDefaults,
    domain::{CacheSettings, DEFAULT_VERSION, HttpMethod},
};

use crate::error::{CliError, CliResult};

/// Local config file name, used when no platform config dir is available.
pub const LOCAL_CONFIG_FILE: &str = ".lapis.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers offered when a prompt is left blank.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub version: String,
    /// One of GET, POST, PUT, DELETE, PATCH (any case).
    pub method: String,
    pub cache_enabled: bool,
    pub cache_ttl_seconds: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.into(),
            method: HttpMethod::default().to_string(),
            cache_enabled: false,
            cache_ttl_seconds: CacheSettings::DEFAULT_TTL_SECONDS,
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist when `require_explicit` is set;
    /// `lapis init` clears it so it can create the file.
    pub fn load(config_file: Option<&Path>, require_explicit: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        builder = match config_file {
            Some(path) => builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(require_explicit),
            ),
            None => builder
                .add_source(
                    File::from(Self::config_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(PathBuf::from(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                ),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("LAPIS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration sources")?;

        config
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.lapis.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "lapis", "lapis")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Validated defaults for the metadata collector.
    pub fn collector_defaults(&self) -> CliResult<CollectorDefaults> {
        let method = HttpMethod::from_str(&self.defaults.method).map_err(|e| {
            CliError::ConfigError {
                message: format!("defaults.method: {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        let version = if self.defaults.version.trim().is_empty() {
            DEFAULT_VERSION.to_string()
        } else {
            self.defaults.version.trim().to_string()
        };

        Ok(CollectorDefaults {
            version,
            method,
            cache_enabled: self.defaults.cache_enabled,
            cache_ttl_seconds: self.defaults.cache_ttl_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("lapis.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_match_collector_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.collector_defaults().unwrap(),
            CollectorDefaults::default()
        );
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_some_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[defaults]\nmethod = \"post\"\ncache_ttl_seconds = 300\n",
        );

        let cfg = AppConfig::load(Some(&path), true).unwrap();
        let defaults = cfg.collector_defaults().unwrap();
        assert_eq!(defaults.method, HttpMethod::Post);
        assert_eq!(defaults.cache_ttl_seconds, 300);
        assert_eq!(defaults.version, DEFAULT_VERSION);
        assert!(!defaults.cache_enabled);
    }

    #[test]
    fn missing_explicit_file_is_an_error_only_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(AppConfig::load(Some(&path), true).is_err());
        assert_eq!(
            AppConfig::load(Some(&path), false).unwrap().defaults,
            Defaults::default()
        );
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[defaults\nmethod = ");
        assert!(AppConfig::load(Some(&path), true).is_err());
    }

    #[test]
    fn unknown_method_is_a_config_error() {
        let mut cfg = AppConfig::default();
        cfg.defaults.method = "TRACE".into();

        let err = cfg.collector_defaults().unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn blank_version_falls_back() {
        let mut cfg = AppConfig::default();
        cfg.defaults.version = "  ".into();
        assert_eq!(cfg.collector_defaults().unwrap().version, DEFAULT_VERSION);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert!(text.contains("[defaults]"));
        assert!(text.contains("method = \"GET\""));

        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
