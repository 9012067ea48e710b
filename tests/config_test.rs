//! Tests for loading configuration files.

use rewind::{RewindConfig, SortOrder};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_from_file_reads_all_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"game.log\"\nlog_filter = \"debug\"\ninitial_sort = \"descending\"\ntick_ms = 250"
    )
    .unwrap();

    let config = RewindConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.initial_sort(), &SortOrder::Descending);
    assert_eq!(config.tick_ms(), &250);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = RewindConfig::load(Some(&missing)).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tick_ms = \"fast\"").unwrap();

    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_overrides_replace_loaded_values() {
    let config = RewindConfig::default()
        .with_log_file(PathBuf::from("elsewhere.log"))
        .with_initial_sort(SortOrder::Descending);

    assert_eq!(config.log_file(), &PathBuf::from("elsewhere.log"));
    assert_eq!(config.initial_sort(), &SortOrder::Descending);
    assert_eq!(config.tick_ms(), &100);
}
