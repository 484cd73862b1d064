use std::fs;
use std::path::PathBuf;

use opsdesk::error::{ConfigError, Error};
use opsdesk::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("opsdesk.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn loads_backend_and_logging_sections() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[backend]
base_url = "https://erp.example.com/"
schema = "24_KR"
timeout_secs = 3

[logging]
level = "info"
format = "json"
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.base_url().unwrap().host_str(), Some("erp.example.com"));
    assert_eq!(config.timeout().as_secs(), 3);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn explicit_missing_path_is_read_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Config::load_or_default(Some(&missing)).unwrap_err();

    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn config_rejects_zero_timeout() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[backend]\ntimeout_secs = 0\n");

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "timeout_secs",
            ..
        })
    ));
    assert_eq!(
        err.to_string(),
        "invalid value for timeout_secs: must be greater than 0"
    );
}

#[test]
fn config_rejects_unknown_log_format() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nformat = \"xml\"\n");

    assert!(Config::load(&path).is_err());
}

#[test]
fn config_rejects_wrong_value_type() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[backend]\ntimeout_secs = \"ten\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn overrides_replace_schema() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[backend]\nschema = \"25_DO\"\n");

    let mut config = Config::load(&path).unwrap();
    config.apply_overrides(None, Some("23_OLD".into()));

    assert_eq!(config.schema().unwrap().as_str(), "23_OLD");
}
