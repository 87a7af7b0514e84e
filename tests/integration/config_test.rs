use mac_assist::core::config::{
    Config, DEFAULT_CLASSIFIER_MODEL, DEFAULT_COMPOSER_MODEL, DEFAULT_OLLAMA_URL,
    DEFAULT_TIMEOUT_SECS,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.disk_path, "/");
    assert_eq!(config.ollama_url, DEFAULT_OLLAMA_URL);
    assert_eq!(config.classifier_model, DEFAULT_CLASSIFIER_MODEL);
    assert_eq!(config.composer_model, DEFAULT_COMPOSER_MODEL);
    assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_load_empty_or_corrupted_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    fs::write(&path, "").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"disk_path": "/Volumes/Data"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.disk_path, "/Volumes/Data");
    assert_eq!(config.ollama_url, DEFAULT_OLLAMA_URL);
    assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set("disk_path", "/home").unwrap();
    config.set("ollama_url", "http://gpu-box:11434/").unwrap();
    config.set("composer_model", "llama3:8b").unwrap();
    config.set("request_timeout_secs", "30").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.ollama_url, "http://gpu-box:11434");
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let mut config = Config::default();

    assert!(config.set("disk_path", "").is_err());
    assert!(config.set("ollama_url", "not a url").is_err());
    assert!(config.set("classifier_model", "").is_err());
    assert!(config.set("request_timeout_secs", "0").is_err());
    assert!(config.set("favorite_color", "blue").is_err());

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_get_and_reset() {
    let mut config = Config::default();
    config.set("classifier_model", "phi3:mini").unwrap();
    assert_eq!(config.get("classifier_model").as_deref(), Some("phi3:mini"));
    assert_eq!(config.get("request_timeout_secs").as_deref(), Some("120"));
    assert_eq!(config.get("unknown"), None);

    config.reset_to_defaults();
    assert_eq!(config, Config::default());
}
