//! Integration tests for layered Settings loading.
//!
//! These tests load explicit files from temp directories so the user's
//! global config never leaks in.

use std::fs;

use tempfile::TempDir;

use my_cli::application::ApplicationError;
use my_cli::config::Settings;
use my_cli::domain::Language;

#[test]
fn given_no_config_file_when_loading_then_uses_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("my-cli.toml");

    // Act
    let settings = Settings::load_from(Some(missing.as_path())).expect("load defaults");

    // Assert
    assert_eq!(settings.greeting, "Hello");
    assert_eq!(settings.language, Language::English);
    assert_eq!(settings.log_level, "info");
}

#[test]
fn given_config_file_when_loading_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("my-cli.toml");
    fs::write(
        &path,
        r#"
greeting = "Howdy"
language = "spanish"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(path.as_path())).expect("load settings");

    // Assert: file values win, unspecified keys keep defaults
    assert_eq!(settings.greeting, "Howdy");
    assert_eq!(settings.language, Language::Spanish);
    assert_eq!(settings.log_level, "info");
}

#[test]
fn given_malformed_config_file_when_loading_then_config_error() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("my-cli.toml");
    fs::write(&path, "language = \"klingon\"\n").unwrap();

    // Act
    let result = Settings::load_from(Some(path.as_path()));

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_template_when_written_and_loaded_then_yields_defaults() {
    // Arrange: the template has every key commented out
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("my-cli.toml");
    fs::write(&path, Settings::template()).unwrap();

    // Act
    let settings = Settings::load_from(Some(path.as_path())).expect("load template");

    // Assert
    assert_eq!(settings, Settings::default());
}
