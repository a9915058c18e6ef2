//! Tests for the get_telegram_id binary
//!
//! Only paths that never reach the network are exercised here.

use std::process::{Command, Output};

use tempfile::tempdir;

fn run_binary(args: &[&str], env: &[(&str, &str)]) -> Output {
    // An empty working directory keeps a developer's .env out of the way
    let workdir = tempdir().expect("tempdir");
    let mut command = Command::new(env!("CARGO_BIN_EXE_get_telegram_id"));
    command
        .args(args)
        .current_dir(workdir.path())
        .env_remove("API_ID")
        .env_remove("API_HASH")
        .env_remove("TELEGRAM_PHONE")
        .env_remove("SESSION_FILE")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("run get_telegram_id")
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let output = run_binary(&[], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "stdout was: {}", stdout);
}

#[test]
fn test_no_arguments_does_not_create_session_file() {
    let dir = tempdir().expect("tempdir");
    let session = dir.path().join("session.txt");

    let output = run_binary(&[], &[("SESSION_FILE", session.to_str().unwrap())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!session.exists());
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let output = run_binary(&["--definitely-not-a-flag"], &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}

#[test]
fn test_missing_credentials_fail_on_stderr() {
    let dir = tempdir().expect("tempdir");
    let session = dir.path().join("session.txt");

    let output = run_binary(&["alice"], &[("SESSION_FILE", session.to_str().unwrap())]);

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("API_ID"));
    assert!(!session.exists());
}

#[test]
fn test_invalid_api_id_fails_on_stderr() {
    let output = run_binary(&["alice"], &[("API_ID", "abc"), ("API_HASH", "deadbeef")]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("API_ID"));
}

#[test]
fn test_help_is_available() {
    let output = run_binary(&["--help"], &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("username"));
}
