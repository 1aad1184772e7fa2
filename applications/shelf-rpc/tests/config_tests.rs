//! Configuration loading tests
//!
//! These assume no `SHELF_RPC_*` variables are set in the test environment.

use shelf_rpc::{RpcConfig, RpcError};
use std::io::Write;
use std::time::Duration;
use tempfile::{Builder, TempDir};

fn write_config(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_snake_case_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        r#"{
            "discord_client_id": "1234567890",
            "audiobookshelf_url": "https://abs.example.com",
            "audiobookshelf_token": "secret",
            "poll_interval_secs": 30,
            "cover_provider": "openlibrary"
        }"#,
    );

    let config = RpcConfig::load(&path).unwrap();
    config.validate().unwrap();

    assert_eq!(config.discord_app_id().unwrap(), 1234567890);
    assert_eq!(config.audiobookshelf_url, "https://abs.example.com");
    assert_eq!(config.poll_interval(), Duration::from_secs(30));
    assert_eq!(config.cover_provider, "openlibrary");
    assert_eq!(config.request_timeout_secs, 10);
}

#[test]
fn test_load_installer_generated_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.json",
        r#"{
            "audiobookshelfUrl": "http://localhost:13378",
            "audiobookshelfToken": "secret",
            "audiobookshelfUserId": "listener",
            "discordClientId": "1283070638088650752"
        }"#,
    );

    let config = RpcConfig::load(&path).unwrap();
    config.validate().unwrap();

    assert_eq!(config.audiobookshelf_url, "http://localhost:13378");
    assert_eq!(config.audiobookshelf_token, "secret");
    assert_eq!(config.poll_interval_secs, 15);
    assert!(config.check_for_updates);
}

#[test]
fn test_load_toml_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "config.toml",
        r#"
discord_client_id = "42"
audiobookshelf_url = "https://abs.example.com"
audiobookshelf_token = "secret"
check_for_updates = false
"#,
    );

    let config = RpcConfig::load(&path).unwrap();
    assert_eq!(config.discord_app_id().unwrap(), 42);
    assert!(!config.check_for_updates);
}

#[test]
fn test_file_without_extension_is_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "shelf-rpc",
        r#"{ "audiobookshelf_url": "https://abs.example.com", "audiobookshelf_token": "t" }"#,
    );

    let config = RpcConfig::load(&path).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = Builder::new().prefix("shelf-rpc").tempdir().unwrap();
    let config = RpcConfig::load(&dir.path().join("missing.json")).unwrap();

    assert!(config.audiobookshelf_url.is_empty());
    match config.validate().unwrap_err() {
        RpcError::Config(msg) => assert!(msg.contains("audiobookshelf_url")),
        e => panic!("Expected Config error, got: {:?}", e),
    }
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "config.json", "{ not json");

    assert!(matches!(RpcConfig::load(&path), Err(RpcError::Config(_))));
}
