//! Configuration files on disk.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use wled::config::{self, PanelConfig};
use wled::WledError;

#[test]
fn test_init_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let created = config::init_config(&path, Some("http://10.0.0.7".into()), false).unwrap();
    assert!(path.exists());

    let loaded = config::load_config(&path).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.device_url(None).unwrap(), "http://10.0.0.7");
    assert_eq!(loaded.device_url(Some("http://other")).unwrap(), "http://other");
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[device]\nurl = \"http://keep.me\"\n").unwrap();

    assert!(config::init_config(&path, None, false).is_err());
    assert_eq!(
        config::load_config(&path).unwrap().device.url.as_deref(),
        Some("http://keep.me")
    );

    config::init_config(&path, None, true).unwrap();
    assert_eq!(config::load_config(&path).unwrap().device.url, None);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = config::load_config(&path).unwrap_err();
    assert!(matches!(err, WledError::ConfigNotFound { .. }));
    assert_eq!(err.suggestion(), Some("Run: wled init"));

    assert_eq!(config::load_or_default(&path).unwrap(), PanelConfig::default());
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[live]\ninterval_ms = 100\n").unwrap();

    let loaded = config::load_config(&path).unwrap();
    assert_eq!(loaded.live_config().interval, Duration::from_millis(100));
    assert_eq!(loaded.live_config().history_lines, 128);
    assert_eq!(loaded.staleness(), Duration::from_millis(1000));
}

#[test]
fn test_bad_files_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    fs::write(&path, "[device\n").unwrap();
    assert!(matches!(
        config::load_config(&path),
        Err(WledError::ConfigParse(_))
    ));

    fs::write(&path, "[device]\nport = 80\n").unwrap();
    assert!(config::load_config(&path).is_err());
}
