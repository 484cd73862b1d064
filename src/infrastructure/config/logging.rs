//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Accepted values for `logging.format`.
pub const FORMATS: &[&str] = &["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// The filter directive after applying `-v` flags.
    ///
    /// One `-v` raises the level to `debug`, two or more to `trace`.
    #[must_use]
    pub fn effective_level(&self, verbosity: u8) -> &str {
        match verbosity {
            0 => &self.level,
            1 => "debug",
            _ => "trace",
        }
    }

    /// Initialize the tracing subscriber. `RUST_LOG` wins over the config.
    ///
    /// Logs go to stderr so tables and JSON on stdout stay clean.
    pub fn init(&self, verbosity: u8) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.effective_level(verbosity)));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.effective_level(0), "warn");
        assert_eq!(config.effective_level(1), "debug");
        assert_eq!(config.effective_level(3), "trace");
    }
}
