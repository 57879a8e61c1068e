//! Shared test utilities.
//!
//! - `fake_device`: a WLED stand-in served over HTTP with axum
//! - `wled_cmd`: the `wled` binary with a clean environment
#![allow(dead_code)]

pub mod fake_device;

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub use fake_device::FakeDevice;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The `wled` binary with the panel's environment variables cleared and its
/// configuration pointed at `config`.
#[must_use]
pub fn wled_cmd(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wled").expect("wled binary");
    cmd.env_remove("WLED_URL")
        .env_remove("WLED_FORMAT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config);
    cmd
}

/// The `wled` binary with no `--config` flag.
#[must_use]
pub fn wled_bare() -> Command {
    let mut cmd = Command::cargo_bin("wled").expect("wled binary");
    cmd.env_remove("WLED_URL")
        .env_remove("WLED_CONFIG")
        .env_remove("WLED_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config file naming `url` and return its path.
pub fn config_for(dir: &Path, url: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, format!("[device]\nurl = \"{url}\"\n")).expect("write config");
    path
}

/// Run `cmd` off the async runtime so an in-process fake device keeps
/// serving while the binary talks to it.
pub async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("run wled"))
        .await
        .expect("join wled")
}

pub fn parse_json(text: &str) -> Value {
    serde_json::from_str(text.trim()).unwrap_or_else(|_| panic!("Failed to parse JSON:\n{text}"))
}
