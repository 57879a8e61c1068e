//! Path helpers for the configuration file.
//!
//! Supports "~" home directory expansion and the platform config directory.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Result, WledError};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "wled";
/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Expand a leading `~` to the home directory; other paths are returned as-is.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if path_str != "~" && !path_str.starts_with("~/") {
        trace!(path = %path.display(), "No home expansion needed");
        return Ok(path.to_path_buf());
    }

    let home = home_dir()?;
    let resolved = match path_str.strip_prefix("~/") {
        Some(rest) if !rest.is_empty() => home.join(rest),
        _ => home,
    };
    debug!(
        original = %path.display(),
        resolved = %resolved.display(),
        "Expanded home directory path"
    );
    Ok(resolved)
}

/// Resolve the user's home directory (cross-platform).
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        WledError::ConfigInvalid("Could not determine home directory".to_string())
    })
}

/// `<config_dir>/wled/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        WledError::ConfigInvalid("Could not determine configuration directory".to_string())
    })?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

/// The explicit path (home-expanded) or the default location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => expand_home(path),
        None => default_config_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_untouched() {
        let path = Path::new("/etc/wled.toml");
        assert_eq!(expand_home(path).unwrap(), path);
        assert_eq!(expand_home(Path::new("rel/x.toml")).unwrap(), Path::new("rel/x.toml"));
        // Only a leading "~/" expands.
        assert_eq!(expand_home(Path::new("~user/x")).unwrap(), Path::new("~user/x"));
    }

    #[test]
    fn test_home_expansion() {
        let Ok(home) = home_dir() else {
            return;
        };
        assert_eq!(expand_home(Path::new("~")).unwrap(), home);
        assert_eq!(
            expand_home(Path::new("~/wled/config.toml")).unwrap(),
            home.join("wled/config.toml")
        );
    }

    #[test]
    fn test_default_path_shape() {
        let Ok(path) = default_config_path() else {
            return;
        };
        assert!(path.ends_with("wled/config.toml"));
    }
}
