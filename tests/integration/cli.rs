//! The `wled` binary, end to end.

use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use crate::common::{FakeDevice, config_for, parse_json, run, wled_cmd};

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// === Offline commands ===

#[test]
fn test_effects_filter_robot() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), "http://unused");

    let output = wled_cmd(&config)
        .args(["--robot", "effects", "--filter", "fire"])
        .output()
        .unwrap();
    output.clone().assert().success();

    let json = parse_json(&stdout(&output));
    let list = json.as_array().expect("effect array");
    assert!(!list.is_empty());
    assert!(list.iter().any(|e| e["wled_index"] == 66));
    for effect in list {
        let names = format!(
            "{} {} {}",
            effect["ui_name"], effect["proposed_name"], effect["effect_id"]
        );
        assert!(names.to_lowercase().contains("fire"), "{names}");
    }
}

#[test]
fn test_version_robot() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), "http://unused");

    let output = wled_cmd(&config).args(["version", "--robot"]).output().unwrap();
    output.clone().assert().success();
    let json = parse_json(&stdout(&output));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("c.toml");

    wled_cmd(&config)
        .args(["--url", "http://192.168.1.50", "init"])
        .assert()
        .success();
    let written = std::fs::read_to_string(&config).unwrap();
    assert!(written.contains("http://192.168.1.50"));

    wled_cmd(&config)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    wled_cmd(&config).args(["init", "--force"]).assert().success();
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");

    wled_cmd(&missing)
        .args(["--url", "http://unused", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_path_and_show() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), "http://10.0.0.9");

    wled_cmd(&config)
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let output = wled_cmd(&config).args(["--robot", "config"]).output().unwrap();
    let json = parse_json(&stdout(&output));
    assert_eq!(json["exists"], true);
    assert_eq!(json["config"]["device"]["url"], "http://10.0.0.9");
    assert_eq!(json["config"]["live"]["history_lines"], 128);
}

#[test]
fn test_missing_url_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    wled_cmd(&config)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no device URL"));
}

#[test]
fn test_invalid_segment_range() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), "http://unused");

    wled_cmd(&config)
        .args(["add-segment", "--start", "10", "--stop", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than start"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), "http://unused");

    wled_cmd(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wled"));
}

#[test]
fn test_quick_start_robot() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), "http://unused");

    let output = wled_cmd(&config).arg("--robot").output().unwrap();
    let json = parse_json(&stdout(&output));
    assert_eq!(json["tool"], "wled");
    assert!(json.get("commands").is_some());
}

// === Against the stand-in device ===

#[tokio::test(flavor = "multi_thread")]
async fn test_status_robot() {
    let fake = FakeDevice::start(2).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());

    let mut cmd = wled_cmd(&config);
    cmd.args(["--robot", "status"]);
    let output = run(cmd).await;
    output.clone().assert().success();

    let json = parse_json(&stdout(&output));
    assert_eq!(json["name"], "WLED Mock");
    assert_eq!(json["led_count"], 60);
    assert_eq!(json["segments"].as_array().unwrap().len(), 2);
    assert_eq!(json["segments"][0]["effect_name"], "Solid");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_human() {
    let fake = FakeDevice::start(1).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());

    let mut cmd = wled_cmd(&config);
    cmd.arg("status");
    run(cmd)
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("WLED Mock"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_url_flag_overrides_config() {
    let fake = FakeDevice::start(1).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), "http://127.0.0.1:9");

    let mut cmd = wled_cmd(&config);
    cmd.args(["--robot", "--url", &fake.url(), "segments"]);
    let output = run(cmd).await;
    output.clone().assert().success();
    assert_eq!(parse_json(&stdout(&output)).as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_segment_change() {
    let fake = FakeDevice::start(2).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());

    let mut cmd = wled_cmd(&config);
    cmd.args([
        "--robot", "segment", "1", "--fx", "66", "--speed", "10", "--color1", "#00f", "--color3",
        "none",
    ]);
    let output = run(cmd).await;
    output.clone().assert().success();

    // One write carries every change.
    let writes = fake.writes();
    assert_eq!(writes.len(), 1);
    let seg = &writes[0]["seg"];
    assert_eq!(seg["id"], 1);
    assert_eq!(seg["fx"], 66);
    assert_eq!(seg["sx"], 10);
    assert_eq!(seg["col"], serde_json::json!([[0, 0, 255], [0, 0, 0], []]));

    let json = parse_json(&stdout(&output));
    assert_eq!(json["effect"], 66);
    assert_eq!(json["speed"], 10);
    assert_eq!(json["colors"][0], serde_json::json!([0, 0, 255]));
    assert_eq!(json["colors"][2], Value::Null);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_segment_rejects_bad_color() {
    let fake = FakeDevice::start(1).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());

    let mut cmd = wled_cmd(&config);
    cmd.args(["segment", "0", "--color1", "zzz"]);
    run(cmd)
        .await
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color"));
    assert!(fake.writes().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_segment() {
    let fake = FakeDevice::start(1).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());

    let mut cmd = wled_cmd(&config);
    cmd.args(["segment", "7"]);
    run(cmd)
        .await
        .assert()
        .failure()
        .stderr(predicate::str::contains("Segment 7 not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_power_off() {
    let fake = FakeDevice::start(1).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());

    let mut cmd = wled_cmd(&config);
    cmd.args(["--robot", "power", "off"]);
    let output = run(cmd).await;
    output.clone().assert().success();

    assert_eq!(parse_json(&stdout(&output))["on"], false);
    assert_eq!(fake.document()["state"]["on"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_palettes_robot() {
    let fake = FakeDevice::start(1).await;
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());

    let mut cmd = wled_cmd(&config);
    cmd.args(["--robot", "palettes", "0"]);
    let output = run(cmd).await;
    output.clone().assert().success();

    let json = parse_json(&stdout(&output));
    assert_eq!(json["segment"], 0);
    let palettes = json["palettes"].as_array().unwrap();
    let sunset = palettes
        .iter()
        .find(|p| p["name"] == "Sunset")
        .expect("gradient palette listed");
    assert_eq!(sunset["group"], "gradient");
    assert_eq!(sunset["colors"].as_array().unwrap().len(), 3);
    assert!(palettes.iter().any(|p| p["selected"] == true && p["id"] == 0));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_live_saves_history() {
    let fake = FakeDevice::start(1).await;
    fake.push_live_frame(&["ff0000", "00ff00"]);
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path(), &fake.url());
    let png = dir.path().join("live.png");

    let mut cmd = wled_cmd(&config);
    cmd.args(["--format", "json-compact", "live", "-n", "3", "--interval-ms", "10", "-o"])
        .arg(&png);
    let output = run(cmd).await;
    output.clone().assert().success();

    let text = stdout(&output);
    let summary = parse_json(text.lines().last().unwrap());
    assert!(summary["frames"].as_u64().unwrap() >= 3);
    assert_eq!(summary["width"], 2);
    assert!(summary["saved_to"].as_str().unwrap().ends_with("live.png"));
    assert!(png.exists());
}
