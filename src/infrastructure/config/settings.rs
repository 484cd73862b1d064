//! Application configuration loading and validation.
//!
//! Provides the [`Config`] struct that aggregates all settings. Configuration
//! is read from a TOML file; `OPSDESK_BASE_URL` and `OPSDESK_SCHEMA` override
//! the file, and a `--schema` flag overrides both.
//!
//! # Example
//!
//! ```no_run
//! use opsdesk::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("opsdesk.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::logging::{LoggingConfig, FORMATS};
use crate::domain::Schema;
use crate::error::{ConfigError, Result};

/// File read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "opsdesk.toml";

/// Overrides `backend.base_url`.
pub const BASE_URL_ENV: &str = "OPSDESK_BASE_URL";

/// Overrides `backend.schema`.
pub const SCHEMA_ENV: &str = "OPSDESK_SCHEMA";

/// Connection settings for the business backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Root URL of the REST API, without the `/api` segment.
    pub base_url: String,
    /// The `v_db` partition every request is sent with.
    pub schema: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8999".into(),
            schema: "25_DO".into(),
            timeout_secs: 10,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, apply environment overrides,
    /// and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from an explicit path, or from [`DEFAULT_CONFIG_PATH`] if it
    /// exists, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load(default_path);
        }
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `OPSDESK_BASE_URL` and `OPSDESK_SCHEMA` when set.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(SCHEMA_ENV).ok(),
        );
    }

    /// Replace the base URL and schema with non-empty overrides.
    pub fn apply_overrides(&mut self, base_url: Option<String>, schema: Option<String>) {
        if let Some(base_url) = base_url.filter(|v| !v.trim().is_empty()) {
            self.backend.base_url = base_url;
        }
        if let Some(schema) = schema.filter(|v| !v.trim().is_empty()) {
            self.backend.schema = schema;
        }
    }

    /// Check values against the accepted ranges.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        self.base_url()?;
        if self.backend.schema.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "schema" }.into());
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// The backend root as a parsed http(s) URL.
    #[allow(clippy::result_large_err)]
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(self.backend.base_url.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "base_url",
                reason: e.to_string(),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        Ok(url)
    }

    /// The configured schema.
    #[allow(clippy::result_large_err)]
    pub fn schema(&self) -> Result<Schema> {
        Ok(Schema::try_new(self.backend.schema.as_str())?)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }

    /// Initialize logging based on configuration and `-v` count.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse_without_env(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_without_env("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = parse_without_env(
            r#"
            [backend]
            schema = "24_KR"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.schema, "24_KR");
        assert_eq!(config.backend.base_url, "http://localhost:8999");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn overrides_ignore_blank_values() {
        let mut config = Config::default();
        config.apply_overrides(Some("https://erp.example.com".into()), Some("  ".into()));

        assert_eq!(config.backend.base_url, "https://erp.example.com");
        assert_eq!(config.backend.schema, "25_DO");
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = Config::default();
        config.backend.base_url = "ftp://files.example.com".into();

        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue { field: "base_url", .. }))
        ));
    }

    #[test]
    fn rejects_zero_timeout_and_unknown_format() {
        let mut config = Config::default();
        config.backend.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.format = "xml".into();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn blank_schema_is_missing() {
        let mut config = Config::default();
        config.backend.schema = " ".into();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::MissingField { field: "schema" }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            parse_without_env("[backend\nschema = 1"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
