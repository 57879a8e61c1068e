//! Error types for WLED panel operations.

use thiserror::Error;

/// Primary error type for WLED panel operations.
#[derive(Error, Debug)]
pub enum WledError {
    // Device communication errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Device returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed device response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Device snapshot is incomplete (missing {missing})")]
    IncompleteSnapshot { missing: &'static str },

    #[error("Device communication error: {0}")]
    DeviceCommunication(String),

    // Segment errors
    #[error("Segment {id} not found: device has {count} segments")]
    SegmentNotFound { id: u8, count: usize },

    // Input errors
    #[error("Invalid color '{input}': expected hex like ff0000 or #f00")]
    InvalidColor { input: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Configuration invalid: {0}")]
    ConfigInvalid(String),

    // Live preview errors
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl WledError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Http(_)
                | Self::Status { .. }
                | Self::SegmentNotFound { .. }
                | Self::InvalidColor { .. }
                | Self::InvalidArgument(_)
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
                | Self::ConfigInvalid(_)
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Http(_) => {
                Some("Check that the controller is powered and reachable (--url or WLED_URL)")
            }
            Self::Status { .. } => Some("Verify the device runs WLED with the JSON API enabled"),
            Self::SegmentNotFound { .. } => Some("Run: wled segments"),
            Self::InvalidColor { .. } => Some("Use six hex digits, e.g. ff8800"),
            Self::ConfigNotFound { .. } => Some("Run: wled init"),
            Self::ConfigParse(_) => Some("Fix the TOML syntax or run: wled init --force"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using WledError.
pub type Result<T> = std::result::Result<T, WledError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| WledError::Other(format!("{}: {e}", f().into())))
    }
}
