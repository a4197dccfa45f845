//! End-to-end tests for `keycvt keys` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;

use fixtures::*;

#[test]
fn test_keys_plain() {
    let (header_path, header_temp) = create_temp_header(SAMPLE_HEADER);

    let output = Command::new(keycvt_bin())
        .args(["keys", header_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Found {SAMPLE_KEY_COUNT} CACAO keys.")));
    assert!(stdout.contains("  CACAO_KEY_SPACE"));
    assert!(!stdout.contains("CACAO_MOUSE_BUTTON_LEFT"));
}

#[test]
fn test_keys_json_preserves_order() {
    let (header_path, header_temp) = create_temp_header(SAMPLE_HEADER);

    let output = Command::new(keycvt_bin())
        .args(["keys", header_path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["count"], SAMPLE_KEY_COUNT);
    let keys = result["keys"].as_array().unwrap();
    assert_eq!(keys[0]["name"], "CACAO_KEY_SPACE");
    assert_eq!(keys[0]["base"], "SPACE");
    assert_eq!(keys[SAMPLE_KEY_COUNT - 1]["name"], "CACAO_KEY_RIGHT_CONTROL");
    assert_eq!(keys[SAMPLE_KEY_COUNT - 1]["base"], "RIGHT_CONTROL");
}

#[test]
fn test_keys_missing_header() {
    let (header_path, header_temp) = create_temp_header("");

    let output = Command::new(keycvt_bin())
        .args([
            "keys",
            header_temp.path().join("nope.hpp").to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Header file not found"));
}
