//! Tests for configuration loading and resolution

use std::fs;

use chatter::ApiError;
use chatter::adapters::DEFAULT_API_URL;
use chatter::config::{CONFIG_ENV, ChatterConfig, DEFAULT_BIND, Overrides, Settings};
use chatter::core::models::RepositoryRef;
use serial_test::serial;
use tempfile::TempDir;

fn overrides(token: &str, repository: Option<&str>) -> Overrides {
    Overrides {
        token: Some(token.to_string()),
        repository: repository.map(String::from),
        api_url: None,
    }
}

// =============================================================================
// FILE LOADING
// =============================================================================

#[test]
fn test_config_default() {
    let config = ChatterConfig::default();
    assert!(config.repository.is_none());
    assert_eq!(config.server.bind, DEFAULT_BIND);
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
repository = "wrvb/chatter"
api_url = "https://github.example/api/v3"
signoff_pattern = "ship it"

[server]
bind = "127.0.0.1:8080"
"#,
    )
    .unwrap();

    let config = ChatterConfig::load_from(&path).unwrap();

    assert_eq!(config.repository.as_deref(), Some("wrvb/chatter"));
    assert_eq!(config.api_url.as_deref(), Some("https://github.example/api/v3"));
    assert_eq!(config.signoff_pattern.as_deref(), Some("ship it"));
    assert_eq!(config.server.bind, "127.0.0.1:8080");
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "repository = \"wrvb/chatter\"\n").unwrap();

    let config = ChatterConfig::load_from(&path).unwrap();

    assert!(config.api_url.is_none());
    assert_eq!(config.server.bind, DEFAULT_BIND);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    assert!(ChatterConfig::load(Some(&temp.path().join("absent.toml"))).is_err());
}

#[test]
fn test_malformed_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "repository = [").unwrap();

    assert!(ChatterConfig::load_from(&path).is_err());
}

#[test]
#[serial]
fn test_default_location_absent_gives_defaults() {
    let temp = TempDir::new().unwrap();
    // SAFETY: serialized with the other tests that touch the environment
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp.path());
        std::env::remove_var(CONFIG_ENV);
    }

    let config = ChatterConfig::load(None).unwrap();

    unsafe {
        std::env::remove_var("XDG_CONFIG_HOME");
    }
    assert_eq!(config, ChatterConfig::default());
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[test]
fn test_flags_win_over_file() {
    let file = ChatterConfig {
        repository: Some("other/repo".to_string()),
        api_url: Some("https://file.example".to_string()),
        ..ChatterConfig::default()
    };
    let mut flags = overrides("t0ken", Some("wrvb/chatter"));
    flags.api_url = Some("https://flag.example".to_string());

    let settings = Settings::resolve(flags, &file).unwrap();

    assert_eq!(settings.repository, RepositoryRef::new("wrvb", "chatter"));
    assert_eq!(settings.api_url, "https://flag.example");
}

#[test]
fn test_file_fills_missing_flags() {
    let file = ChatterConfig {
        repository: Some("wrvb/chatter".to_string()),
        ..ChatterConfig::default()
    };

    let settings = Settings::resolve(overrides("t0ken", None), &file).unwrap();

    assert_eq!(settings.repository.to_string(), "wrvb/chatter");
    assert_eq!(settings.api_url, DEFAULT_API_URL);
}

#[test]
fn test_missing_token_is_missing_identifier() {
    let flags = Overrides {
        token: None,
        repository: Some("wrvb/chatter".to_string()),
        api_url: None,
    };

    let err = Settings::resolve(flags, &ChatterConfig::default()).unwrap_err();

    assert!(matches!(err, ApiError::MissingIdentifier("token")));
}

#[test]
fn test_bad_repository_is_invalid_not_missing() {
    let err =
        Settings::resolve(overrides("t0ken", Some("chatter")), &ChatterConfig::default()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidRepository(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_absent_repository_is_missing_identifier() {
    let err = Settings::resolve(overrides("t0ken", None), &ChatterConfig::default()).unwrap_err();

    assert!(matches!(err, ApiError::MissingIdentifier("repository")));
}

#[test]
fn test_settings_debug_redacts_token() {
    let settings =
        Settings::resolve(overrides("s3cret", Some("wrvb/chatter")), &ChatterConfig::default())
            .unwrap();

    assert!(!format!("{settings:?}").contains("s3cret"));
}
