//! Configuration for the `wled` CLI.
//!
//! A small TOML file with the device URL and timing knobs. Every field has a
//! default, so a missing file or section is fine:
//!
//! ```toml
//! [device]
//! url = "http://192.168.1.50"
//!
//! [sync]
//! staleness_ms = 1000
//!
//! [live]
//! interval_ms = 40
//! history_lines = 128
//! ```

mod path;

pub use path::{default_config_path, expand_home, home_dir, resolve_config_path};

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::error::{Result, ResultExt, WledError};
use crate::live::{DEFAULT_HISTORY_LINES, DEFAULT_INTERVAL, LiveConfig};
use crate::sync::DEFAULT_STALENESS;

/// Environment variable consulted for the device URL.
pub const URL_ENV: &str = "WLED_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    pub device: DeviceSection,
    pub sync: SyncSection,
    pub live: LiveSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceSection {
    /// Base URL of the controller, e.g. `http://wled.local`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncSection {
    /// Snapshots younger than this are served from cache.
    pub staleness_ms: u64,
}

impl Default for SyncSection {
    fn default() -> Self {
        Self {
            staleness_ms: duration_ms(DEFAULT_STALENESS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LiveSection {
    pub interval_ms: u64,
    pub history_lines: usize,
}

impl Default for LiveSection {
    fn default() -> Self {
        Self {
            interval_ms: duration_ms(DEFAULT_INTERVAL),
            history_lines: DEFAULT_HISTORY_LINES,
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl PanelConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.live.interval_ms == 0 {
            return Err(WledError::ConfigInvalid(
                "live.interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.live.history_lines == 0 {
            return Err(WledError::ConfigInvalid(
                "live.history_lines must be greater than 0".to_string(),
            ));
        }
        if let Some(url) = &self.device.url {
            if url.trim().is_empty() {
                return Err(WledError::ConfigInvalid("device.url is empty".to_string()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn staleness(&self) -> Duration {
        Duration::from_millis(self.sync.staleness_ms)
    }

    #[must_use]
    pub const fn live_config(&self) -> LiveConfig {
        LiveConfig {
            interval: Duration::from_millis(self.live.interval_ms),
            history_lines: self.live.history_lines,
        }
    }

    /// Device URL: the override (CLI flag or `WLED_URL`) wins over the file.
    pub fn device_url(&self, override_url: Option<&str>) -> Result<String> {
        override_url
            .map(str::to_string)
            .or_else(|| self.device.url.clone())
            .ok_or_else(|| {
                WledError::InvalidArgument(format!(
                    "no device URL: pass --url, set {URL_ENV}, or add [device] url to the config"
                ))
            })
    }
}

/// Load and validate a configuration file.
///
/// # Errors
///
/// Returns [`WledError::ConfigNotFound`] if the file does not exist, and a
/// parse or validation error for bad content.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<PanelConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            WledError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            WledError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read config file");
    load_config_from_str(&content)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<PanelConfig> {
    match load_config(path) {
        Err(WledError::ConfigNotFound { .. }) => {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(PanelConfig::default())
        }
        other => other,
    }
}

/// Parse and validate TOML content.
pub fn load_config_from_str(content: &str) -> Result<PanelConfig> {
    trace!("Parsing config content");
    let config: PanelConfig =
        toml::from_str(content).map_err(|e| WledError::ConfigParse(format!("TOML: {e}")))?;
    config.validate()?;
    debug!(
        url = ?config.device.url,
        staleness_ms = config.sync.staleness_ms,
        interval_ms = config.live.interval_ms,
        "Configuration loaded"
    );
    Ok(config)
}

/// Write `config` to `path`, creating parent directories.
#[instrument(skip(config), fields(path = %path.display()))]
pub fn save_config(config: &PanelConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| WledError::ConfigParse(format!("TOML: {e}")))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    info!("Configuration saved");
    Ok(())
}

/// Write a default configuration, refusing to overwrite unless `force`.
pub fn init_config(path: &Path, url: Option<String>, force: bool) -> Result<PanelConfig> {
    if path.exists() && !force {
        return Err(WledError::ConfigInvalid(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let config = PanelConfig {
        device: DeviceSection { url },
        ..PanelConfig::default()
    };
    save_config(&config, path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.staleness(), Duration::from_millis(1000));
        assert_eq!(config.live_config(), LiveConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = load_config_from_str(
            r#"
            [device]
            url = "http://10.0.0.7"

            [live]
            history_lines = 32
            "#,
        )
        .unwrap();
        assert_eq!(config.device.url.as_deref(), Some("http://10.0.0.7"));
        assert_eq!(config.live.history_lines, 32);
        assert_eq!(config.live.interval_ms, 40);
        assert_eq!(config.sync.staleness_ms, 1000);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = load_config_from_str("[device]\nhost = \"x\"").unwrap_err();
        assert!(matches!(err, WledError::ConfigParse(_)));
    }

    #[test]
    fn test_zero_interval_invalid() {
        let err = load_config_from_str("[live]\ninterval_ms = 0").unwrap_err();
        assert!(matches!(err, WledError::ConfigInvalid(_)));
    }

    #[test]
    fn test_url_override_wins() {
        let config = load_config_from_str("[device]\nurl = \"http://a\"").unwrap();
        assert_eq!(config.device_url(Some("http://b")).unwrap(), "http://b");
        assert_eq!(config.device_url(None).unwrap(), "http://a");
        assert!(PanelConfig::default().device_url(None).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(load_config(&path), Err(WledError::ConfigNotFound { .. })));
        assert_eq!(load_or_default(&path).unwrap(), PanelConfig::default());
    }

    #[test]
    fn test_init_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let written = init_config(&path, Some("http://wled.local".into()), false).unwrap();
        assert_eq!(load_config(&path).unwrap(), written);

        assert!(init_config(&path, None, false).is_err());
        init_config(&path, None, true).unwrap();
        assert_eq!(load_config(&path).unwrap().device.url, None);
    }
}
