//! Tests for the layered configuration.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;
use wacloud_config::{ENV_API_VERSION, ENV_BASE_URI, ENV_TOKEN, WacloudConfig};

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_load_bundled_defaults() {
    let config = WacloudConfig::load().unwrap();
    assert!(!config.base_uri.is_empty());
    assert!(!config.api_version.is_empty());
}

#[test]
fn test_from_file_fills_missing_fields() {
    let file = toml_file("api_version = \"v19.0\"\n");
    let config = WacloudConfig::from_file(file.path()).unwrap();

    assert_eq!(config.api_version, "v19.0");
    assert_eq!(config.base_uri, "https://graph.facebook.com");
    assert_eq!(config.token, None);
    assert_eq!(config.timeout(), None);
}

#[test]
fn test_from_file_reads_all_fields() {
    let file = toml_file(
        "base_uri = \"http://localhost:9000\"\napi_version = \"v18.0\"\ntoken = \"file-token\"\ntimeout_secs = 5\n",
    );
    let config = WacloudConfig::from_file(file.path()).unwrap();

    assert_eq!(config.base_uri, "http://localhost:9000");
    assert_eq!(config.token.as_deref(), Some("file-token"));
    assert_eq!(config.timeout(), Some(Duration::from_secs(5)));

    let settings = config.settings().unwrap();
    assert_eq!(settings.api_root(), "http://localhost:9000/v18.0");
    assert_eq!(settings.token(), "file-token");
}

#[test]
fn test_from_file_rejects_malformed_toml() {
    let file = toml_file("base_uri = [unterminated\n");
    let err = WacloudConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_from_file_missing_path() {
    assert!(WacloudConfig::from_file("/nonexistent/wacloud.toml").is_err());
}

#[test]
fn test_environment_overrides_files() {
    let config = WacloudConfig::default().with_env_from(env(&[
        (ENV_TOKEN, "env-token"),
        (ENV_BASE_URI, "https://graph.example.test"),
        (ENV_API_VERSION, "v20.0"),
    ]));

    let settings = config.settings().unwrap();
    assert_eq!(settings.token(), "env-token");
    assert_eq!(settings.api_root(), "https://graph.example.test/v20.0");
}

#[test]
fn test_empty_environment_values_are_ignored() {
    let config = WacloudConfig {
        token: Some("kept".to_string()),
        ..WacloudConfig::default()
    }
    .with_env_from(env(&[(ENV_TOKEN, "  ")]));

    assert_eq!(config.token.as_deref(), Some("kept"));
}

#[test]
fn test_settings_requires_token() {
    let err = WacloudConfig::default().settings().unwrap_err();
    assert!(err.to_string().contains(ENV_TOKEN));
}

#[test]
fn test_settings_rejects_bad_base_uri() {
    let config = WacloudConfig {
        base_uri: "graph.facebook.com".to_string(),
        token: Some("t".to_string()),
        ..WacloudConfig::default()
    };
    assert!(config.settings().is_err());
}
