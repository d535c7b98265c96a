//! End-to-end tests driving the `lv` binary.
//!
//! Tests the full pipeline: load -> append -> merge / correlate / reconstruct.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn lv_binary() -> String {
    env!("CARGO_BIN_EXE_lv").to_string()
}

/// Runs `lv` isolated from the user's config, rendering times in UTC.
fn run_lv(home: &Path, args: &[&str]) -> Output {
    Command::new(lv_binary())
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("LV_UTC", "true")
        .env_remove("LV_TYPING_TIMEOUT_MS")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run lv")
}

fn write_log(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const FIRST: &str = r#"{
    "text": [
        {"type": "text", "timestamp": 0, "package": "com.chat", "text": "h"},
        {"type": "text", "timestamp": 100, "package": "com.chat", "text": "hi"},
        {"type": "text", "timestamp": 300, "package": "com.chat", "text": "h"}
    ],
    "location": [
        {"type": "location", "timestamp": 10000, "lat": 55.75, "lon": 37.61}
    ],
    "notification": [],
    "connectivity": [
        {"type": "connectivity", "timestamp": 9000, "ssid": "home", "bssid": "aa:bb"}
    ]
}"#;

const SECOND: &str = r#"{
    "text": [],
    "location": [
        {"type": "location", "timestamp": 5000, "lat": 55.70, "lon": 37.50}
    ],
    "notification": [
        {"type": "notification", "timestamp": 10000, "package": "com.mail", "title": "Inbox", "text": "1 new"}
    ],
    "connectivity": [
        {"type": "connectivity", "timestamp": 10500, "ssid": "office", "bssid": "cc:dd"}
    ]
}"#;

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "lv should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_timeline_merges_appended_files() {
    let temp = TempDir::new().unwrap();
    let first = write_log(temp.path(), "first.json", FIRST);
    let second = write_log(temp.path(), "second.json", SECOND);

    let output = run_lv(
        temp.path(),
        &[
            "timeline",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
            "--json",
        ],
    );
    let output = stdout(&output);

    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events.len(), 8);

    let timestamps: Vec<i64> = events
        .iter()
        .map(|e| e["timestamp"].as_i64().unwrap())
        .collect();
    assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));

    // Location sorts before notification at the same instant.
    let at_10s: Vec<&str> = events
        .iter()
        .filter(|e| e["timestamp"] == 10_000)
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(at_10s, vec!["location", "notification"]);
}

#[test]
fn test_correlate_uses_combined_connectivity() {
    let temp = TempDir::new().unwrap();
    let first = write_log(temp.path(), "first.json", FIRST);
    let second = write_log(temp.path(), "second.json", SECOND);

    let output = run_lv(
        temp.path(),
        &[
            "correlate",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
            "--location",
            "1",
        ],
    );
    let output = stdout(&output);

    assert_eq!(
        output,
        "#1 01.01.70 00:00:10  55.75, 37.61\n  \
         nearest network: office (cc:dd) at 01.01.70 00:00:10\n  \
         previous: 01.01.70 00:00:05  next: -\n"
    );
}

#[test]
fn test_correlate_selects_location_by_timestamp() {
    let temp = TempDir::new().unwrap();
    let first = write_log(temp.path(), "first.json", FIRST);
    let second = write_log(temp.path(), "second.json", SECOND);

    let output = run_lv(
        temp.path(),
        &[
            "correlate",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
            "--at",
            "5000",
            "--json",
        ],
    );
    let detail: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();

    assert_eq!(detail["index"], 0);
    assert_eq!(detail["nearest_connectivity"]["ssid"], "home");
    assert_eq!(detail["next"]["timestamp"], 10_000);
}

#[test]
fn test_texts_reconstructs_edits() {
    let temp = TempDir::new().unwrap();
    let first = write_log(temp.path(), "first.json", FIRST);

    let output = run_lv(temp.path(), &["texts", first.to_str().unwrap()]);
    let output = stdout(&output);

    assert_eq!(
        output,
        "com.chat\n  01.01.70 00:00:00 - 01.01.70 00:00:00\n    + \"hi\"\n    - \"h\"\n"
    );
}

#[test]
fn test_config_file_changes_typing_timeout() {
    let temp = TempDir::new().unwrap();
    let first = write_log(temp.path(), "first.json", FIRST);
    let config = write_log(temp.path(), "lv.toml", "typing_timeout_ms = 50\n");

    let output = run_lv(
        temp.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "texts",
            first.to_str().unwrap(),
            "--json",
        ],
    );
    let groups: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();

    // Every snapshot is more than 50ms apart, so each is its own session.
    assert_eq!(groups[0]["sessions"].as_array().unwrap().len(), 3);
}

#[test]
fn test_malformed_file_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let bad = write_log(temp.path(), "bad.json", r#"{"text": []}"#);

    let output = run_lv(temp.path(), &["timeline", bad.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load log files"), "stderr: {stderr}");
    assert!(stderr.contains("malformed log data"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.json");

    let output = run_lv(temp.path(), &["notifications", missing.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
}
