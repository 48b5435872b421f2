//! Tests for configuration loading.

use std::io::Write;
use std::path::PathBuf;
use time_travel_tictactoe::AppConfig;

#[test]
fn test_defaults_when_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = AppConfig::load_or_default(dir.path().join("missing.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
    assert!(!*config.start_reversed());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "start_reversed = true").expect("write");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert!(*config.start_reversed());
    assert_eq!(config.log_file(), &PathBuf::from("time_travel_tictactoe.log"));
}

#[test]
fn test_full_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "start_reversed = false\nlog_file = \"game.log\"\nlog_filter = \"debug\""
    )
    .expect("write");

    let config = AppConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "start_reversed = \"maybe\"").expect("write");

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_override_order() {
    let config = AppConfig::default().with_start_reversed(true);
    assert!(*config.start_reversed());
}
