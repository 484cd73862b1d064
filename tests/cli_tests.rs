//! CLI integration tests.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn opsdesk() -> Command {
    let mut cmd = cargo_bin_cmd!("opsdesk");
    cmd.env_remove("OPSDESK_BASE_URL")
        .env_remove("OPSDESK_SCHEMA")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_pages() {
    opsdesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vendors"))
        .stdout(predicate::str::contains("progress"))
        .stdout(predicate::str::contains("stock-out"));
}

#[test]
fn version_names_binary() {
    opsdesk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("opsdesk"));
}

#[test]
fn malformed_date_is_usage_error() {
    opsdesk()
        .args(["progress", "--from", "14/03/2025"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn config_init_writes_valid_template() {
    let dir = TempDir::new().unwrap();

    opsdesk()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let written = fs::read_to_string(dir.path().join("opsdesk.toml")).unwrap();
    assert!(written.contains("[backend]"));

    opsdesk()
        .current_dir(dir.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("opsdesk.toml"), "").unwrap();

    opsdesk()
        .current_dir(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_validate_reports_invalid_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[backend]\nbase_url = \"ftp://files.example.com\"\n").unwrap();

    opsdesk()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn config_validate_points_at_toml_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[backend]\ntimeout_secs = \"ten\"\n").unwrap();

    opsdesk()
        .args(["--color", "never", "config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.toml"))
        .stderr(predicate::str::contains("timeout_secs"));
}

#[test]
fn config_show_json_applies_schema_flag() {
    let dir = TempDir::new().unwrap();

    opsdesk()
        .current_dir(dir.path())
        .args(["--json", "--schema", "24_KR", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema\":\"24_KR\""));
}

#[test]
fn base_url_flag_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("opsdesk.toml");
    fs::write(&path, "[backend]\nbase_url = \"http://127.0.0.1:9\"\n").unwrap();

    opsdesk()
        .args(["--json", "--base-url", "https://erp.example.com", "config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base_url\":\"https://erp.example.com\""));
}

#[test]
fn bad_base_url_flag_is_rejected() {
    let dir = TempDir::new().unwrap();

    opsdesk()
        .current_dir(dir.path())
        .args(["--base-url", "ftp://files.example.com", "stock", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("base_url"));
}

#[test]
fn unreachable_backend_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("opsdesk.toml");
    fs::write(
        &path,
        "[backend]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_secs = 2\n",
    )
    .unwrap();

    opsdesk()
        .args(["--color", "never", "stock", "list", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("×"));
}
