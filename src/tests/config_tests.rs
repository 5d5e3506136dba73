//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    global_config, init_global_config, ConfigLoader, LanaiConfig, LogConfig, Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.initial_term, "App");
    assert!(config.catalog.path.is_none());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LanaiConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.catalog.path = Some(PathBuf::from("catalog.xml"));
    assert!(config.validate().is_err());

    config.catalog.path = None;
    config.search.max_suggestions = usize::MAX;
    assert!(config.validate().is_err());
}

/// Test loading configuration without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let loader = ConfigLoader::new(None::<PathBuf>, "LANAI_TEST_DEFAULTS");
    let config = loader.load().unwrap();
    assert_eq!(config.search.max_suggestions, 0);
    assert_eq!(config.log.level, LogConfig::default().level);
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
            [catalog]
            path = "products.json"

            [search]
            initial_term = "Sam"
            max_suggestions = 3
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.catalog.path, Some(PathBuf::from("products.json")));
    assert_eq!(config.search.initial_term, "Sam");
    assert_eq!(config.search.limit(), Some(3));

    // Other values should be defaults
    assert_eq!(config.log.level, "warn");
    assert!(!config.log.json);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("config.json", r#"{ "log": { "level": "trace", "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "LANAI_TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.log.level, "trace");
    assert!(config.log.json);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("config_env_test.toml", "[search]\ninitial_term = \"Sam\"\n")
        .unwrap();

    fixture.set_env("LANAI_TEST_ENV__SEARCH__INITIAL_TERM", "Nike");
    fixture.set_env("LANAI_TEST_ENV__SEARCH__MAX_SUGGESTIONS", "7");

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.search.initial_term, "Nike");
    assert_eq!(config.search.max_suggestions, 7);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.temp_dir.path().join("absent.toml");

    let result = ConfigLoader::new(Some(&missing), "LANAI_TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(path)) if path == missing));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("invalid.toml", "[search\ninitial_term = App\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that values which parse but fail validation are rejected on load.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("bad_level.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_BAD_LEVEL");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that unknown file extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("config.ini", "level=info").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "LANAI_TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&LanaiConfig::default()).unwrap();
    let parsed: LanaiConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.search.initial_term, "App");
    assert!(parsed.catalog.path.is_none());
}

/// Test that the global configuration is set once and then kept.
#[test]
fn test_global_config_first_write_wins() {
    let mut first = LanaiConfig::default();
    first.search.initial_term = "Sony".to_string();
    init_global_config(first);

    let mut second = LanaiConfig::default();
    second.search.initial_term = "Canon".to_string();
    init_global_config(second);

    let config = global_config().unwrap();
    assert_eq!(config.search.initial_term, "Sony");
}
