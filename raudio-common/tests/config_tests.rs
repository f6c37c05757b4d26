//! Tests for configuration file loading and graceful degradation
//!
//! Tests that manipulate XDG_CONFIG_HOME are marked with #[serial] so they
//! run sequentially, not in parallel.

use raudio_common::config::{default_config_path, TomlConfig, DEFAULT_PORT};
use raudio_common::Error;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 5800

[client]
server_url = "http://media-box:5800"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = TomlConfig::load(&path).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5800);
    assert_eq!(config.client.server_url, "http://media-box:5800");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();

    match TomlConfig::load(&path) {
        Err(Error::Toml { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Toml error, got {:?}", other),
    }
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let result = TomlConfig::load_or_default(Some(&path));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_missing_default_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = TomlConfig::load_or_default(None).unwrap();

    env::remove_var("XDG_CONFIG_HOME");
    assert_eq!(config.server.port, DEFAULT_PORT);
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_default_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    env::set_var("XDG_CONFIG_HOME", dir.path());

    let path = default_config_path().expect("config dir");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[client]\nserver_url = \"http://10.0.0.2:5000\"\n").unwrap();

    let config = TomlConfig::load_or_default(None).unwrap();

    env::remove_var("XDG_CONFIG_HOME");
    assert_eq!(config.client.server_url, "http://10.0.0.2:5000");
    assert_eq!(path, dir.path().join("raudio").join("config.toml"));
}
