//! Handler for the `config` command group.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use super::diagnostic::ConfigDiagnostic;
use super::output;
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::{Config, DEFAULT_CONFIG_PATH};

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

fn target(path: Option<&Path>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), Path::to_path_buf)
}

/// Execute `config init`.
#[allow(clippy::result_large_err)]
pub fn execute_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = target(path);
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your backend URL and schema", path.display()));
    output::note(&format!(
        "2. Run: opsdesk config validate --config {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
///
/// `base_url` and `schema` are the command-line flags, applied last.
#[allow(clippy::result_large_err)]
pub fn execute_show(path: Option<&Path>, base_url: Option<&str>, schema: Option<&str>) -> Result<()> {
    if path.is_none() && !Path::new(DEFAULT_CONFIG_PATH).exists() {
        output::warning(&format!("{DEFAULT_CONFIG_PATH} not found, showing defaults"));
    }
    let mut config = Config::load_or_default(path)?;
    config.apply_overrides(base_url.map(str::to_string), schema.map(str::to_string));
    config.validate()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": config,
        }));
        return Ok(());
    }

    output::section("Backend");
    output::field("Base URL", &config.backend.base_url);
    output::field("Schema", &config.backend.schema);
    output::field("Timeout", format!("{}s", config.backend.timeout_secs));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// TOML errors are rendered with the offending span before the error is
/// returned.
#[allow(clippy::result_large_err)]
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    let path = target(path);
    let content = fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;

    let config = match Config::parse_toml(&content) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::Parse(err))) => {
            if !output::is_json() {
                if let Some(diagnostic) =
                    ConfigDiagnostic::from_toml(&path.display().to_string(), &content, &err)
                {
                    let diagnostic =
                        diagnostic.with_help("see config.toml.example for the accepted keys");
                    eprintln!("{}", diagnostic.render(output::color_enabled()));
                }
            }
            return Err(ConfigError::Parse(err).into());
        }
        Err(e) => return Err(e),
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Path", path.display());
    output::field("Backend", &config.backend.base_url);
    output::field("Schema", &config.backend.schema);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_a_valid_config() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        config.validate().unwrap();
        assert_eq!(config, Config::default());
    }
}
