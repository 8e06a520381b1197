//! Integration tests for configuration loading and saving.

use cz_core::config::{AppConfig, ClientConfig};
use cz_core::error::CzError;
use tempfile::TempDir;

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config: AppConfig = toml::from_str("").unwrap();
    assert_eq!(config.client.base_url, "https://api.contentzen.io");
    assert_eq!(config.client.timeout_ms, 10_000);
    assert!(config.client.api_token.is_empty());
    assert!(!config.logging.json_output);
}

#[test]
fn partial_client_section_keeps_other_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        [client]
        api_token = "tok_123"
        "#,
    )
    .unwrap();
    assert_eq!(config.client.api_token, "tok_123");
    assert_eq!(config.client.timeout_ms, 10_000);
    assert!(config.client.has_credential());
}

#[test]
fn save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.client = ClientConfig {
        base_url: "http://localhost:4000".into(),
        api_token: "abc".into(),
        timeout_ms: 2_500,
    };
    config.logging.level = "debug".into();
    config.save_to_file(&path).unwrap();

    let loaded = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.client.base_url, "http://localhost:4000");
    assert_eq!(loaded.client.api_token, "abc");
    assert_eq!(loaded.client.timeout_ms, 2_500);
    assert_eq!(loaded.logging.level, "debug");
}

#[test]
fn malformed_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[client\napi_token = ").unwrap();

    let err = AppConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, CzError::Config(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CzError::Io(_)));
}

#[test]
fn explicit_log_directory_is_used() {
    let mut config = AppConfig::default();
    config.logging.directory = "/tmp/cz-logs".into();
    assert_eq!(
        config.effective_log_dir().unwrap(),
        std::path::PathBuf::from("/tmp/cz-logs")
    );
}

#[test]
fn default_paths_live_under_app_directories() {
    use cz_core::platform;

    if let (Ok(config_dir), Ok(path)) = (platform::config_dir(), AppConfig::default_config_path()) {
        assert_eq!(path, config_dir.join("config.toml"));
    }
    if let Ok(data_dir) = platform::data_dir() {
        let config = AppConfig::default();
        assert_eq!(config.effective_log_dir().unwrap(), data_dir.join("logs"));
    }
}
