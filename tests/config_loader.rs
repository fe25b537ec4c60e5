use formulario::config::{Config, ConfigError};
use std::fs;
use std::path::PathBuf;

fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn missing_explicit_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Config::load_from(dir.path().join("absent.toml")).expect_err("read fails");
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn full_config_parses() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        "tick_rate_ms = 100\nlog_file = \"/tmp/formulario.log\"\n",
    );

    let config = Config::load_from(path).expect("load");
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(
        config.log_file,
        Some(PathBuf::from("/tmp/formulario.log"))
    );
}

#[test]
fn partial_config_keeps_defaults_for_missing_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "tick_rate_ms = 500\n");

    let config = Config::load_from(path).expect("load");
    assert_eq!(config.tick_rate_ms, 500);
    assert!(config.log_file.is_none());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "tick_rate_ms = \"not a number\"\n");

    let err = Config::load_from(path).expect_err("parse fails");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(&dir, "tick_rate_ms = 0\n");

    let err = Config::load_from(path).expect_err("validation fails");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
