//! Tests for loading the settings file.

use noughts::Config;
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert!(*config.sound().enabled());
    assert_eq!(config.ui().title(), "TicTacToe");
    assert_eq!(config.log_file(), "noughts.log");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sound]\nenabled = false\n\n[ui]\ntitle = \"Noughts\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert!(!*config.sound().enabled());
    assert_eq!(*config.sound().quit_linger_ms(), 600);
    assert_eq!(config.ui().title(), "Noughts");
    assert_eq!(config.log_file(), "noughts.log");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sound]\nenabled = \"loud\"").unwrap();

    let err = Config::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{}", err);
}
