mod common;

use character_browser::config::{Config, ConfigError, DEFAULT_ENDPOINT};
use common::temp_config;
use std::time::Duration;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(!config.ui.fetch_on_start);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("character-browser/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn test_full_file_is_loaded() {
    let (_dir, path) = temp_config(
        r#"
[api]
endpoint = "http://localhost:3000/api/"

[ui]
tick_rate_ms = 100
fetch_on_start = true
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.endpoint, "http://localhost:3000/api");
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
    assert!(config.ui.fetch_on_start);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config("[ui]\nfetch_on_start = true\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.fetch_on_start);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nendpoint = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_non_http_endpoint_is_rejected() {
    let (_dir, path) = temp_config("[api]\nendpoint = \"ftp://example.com/api\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_endpoint_override_replaces_file_value() {
    let (_dir, path) = temp_config("[api]\nendpoint = \"https://example.com/api\"\n");

    let config = Config::load_from(&path)
        .unwrap()
        .with_endpoint("http://127.0.0.1:9/api//".to_string())
        .unwrap();
    assert_eq!(config.api.endpoint, "http://127.0.0.1:9/api");
}
