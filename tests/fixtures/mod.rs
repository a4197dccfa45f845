//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A trimmed-down CACAO input header covering every rule of the mapping chain.
pub const SAMPLE_HEADER: &str = "\
#pragma once

// Printable keys
#define CACAO_KEY_SPACE              32
#define CACAO_KEY_A                  65
#define CACAO_KEY_GRAVE_ACCENT       96

// Function keys
#define CACAO_KEY_ESCAPE             256
#define CACAO_KEY_ENTER              257
#define CACAO_KEY_CAPS_LOCK          280
#define CACAO_KEY_F12                301
#define CACAO_KEY_KP_ENTER           335
#define CACAO_KEY_LEFT_SHIFT         340
#define CACAO_KEY_RIGHT_CONTROL      345

#define CACAO_MOUSE_BUTTON_LEFT      0
";

/// Number of key defines in [`SAMPLE_HEADER`].
pub const SAMPLE_KEY_COUNT: usize = 10;

/// Path to the keycvt binary
pub fn keycvt_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keycvt")
}

/// Writes a header into a fresh temp directory.
///
/// # Returns
/// The header path and the temp directory, which must be kept alive.
pub fn create_temp_header(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("Input.hpp");
    fs::write(&path, content).expect("Failed to write header");
    (path, temp_dir)
}

/// Writes a rules file next to the given temp directory's other files.
pub fn create_rules_file(temp_dir: &TempDir, content: &str) -> PathBuf {
    let path = temp_dir.path().join("rules.toml");
    fs::write(&path, content).expect("Failed to write rules file");
    path
}

/// Builds wizard answers in prompt order, followed by override lines and the
/// terminating empty line.
pub fn wizard_answers(
    prefix: &str,
    key_case: &str,
    control_case: &str,
    keypad_prefix: &str,
    enter: &str,
    pattern: &str,
    overrides: &[&str],
) -> String {
    let mut answers = [prefix, key_case, control_case, keypad_prefix, enter, pattern].join("\n");
    answers.push('\n');
    for line in overrides {
        answers.push_str(line);
        answers.push('\n');
    }
    answers.push('\n');
    answers
}

/// Runs keycvt with the given arguments and stdin content.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(keycvt_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn keycvt");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for keycvt")
}

/// Lines of the generated table (`{...},` rows) from text-mode stdout.
pub fn table_rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| line.starts_with('{') && line.ends_with("},"))
        .map(str::to_string)
        .collect()
}
