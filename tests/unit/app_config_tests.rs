/*!
 * Tests for application configuration
 */

use anyhow::Result;
use subsweep::app_config::{CleaningConfig, Config};

/// Test default configuration values
#[test]
fn test_default_config_shouldMatchDocumentedThresholds() {
    let config = Config::default();

    assert_eq!(config.cleaning.max_line_length, 30);
    assert_eq!(config.cleaning.max_joined_length, 40);
    assert_eq!(config.cleaning.song_marker, '\u{266a}');
    assert_eq!(config.output_suffix, "_clean");
}

/// Test that the default configuration passes validation
#[test]
fn test_validate_withDefaultConfig_shouldPass() {
    let config = Config::default();

    assert!(config.validate().is_ok());
}

/// Test validation of zero thresholds
#[test]
fn test_validate_withZeroLineLength_shouldFail() {
    let config = Config {
        cleaning: CleaningConfig {
            max_line_length: 0,
            ..CleaningConfig::default()
        },
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

/// Test validation of inverted thresholds
#[test]
fn test_validate_withJoinedShorterThanLine_shouldFail() {
    let config = Config {
        cleaning: CleaningConfig {
            max_line_length: 50,
            max_joined_length: 40,
            ..CleaningConfig::default()
        },
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

/// Test validation of the output suffix
#[test]
fn test_validate_withEmptySuffix_shouldFail() {
    let config = Config {
        output_suffix: String::new(),
        ..Config::default()
    };

    assert!(config.validate().is_err());
}

/// Test JSON round trip of the configuration
#[test]
fn test_config_withJsonRoundTrip_shouldPreserveValues() -> Result<()> {
    let config = Config {
        cleaning: CleaningConfig {
            max_line_length: 25,
            max_joined_length: 35,
            song_marker: '#',
        },
        output_suffix: "_swept".to_string(),
        ..Config::default()
    };

    let json = serde_json::to_string_pretty(&config)?;
    let parsed: Config = serde_json::from_str(&json)?;

    assert_eq!(parsed.cleaning.max_line_length, 25);
    assert_eq!(parsed.cleaning.max_joined_length, 35);
    assert_eq!(parsed.cleaning.song_marker, '#');
    assert_eq!(parsed.output_suffix, "_swept");

    Ok(())
}

/// Test that a partial JSON config falls back to defaults
#[test]
fn test_config_withPartialJson_shouldUseDefaults() -> Result<()> {
    let json = r#"{ "output_suffix": "_done" }"#;

    let parsed: Config = serde_json::from_str(json)?;

    assert_eq!(parsed.output_suffix, "_done");
    assert_eq!(parsed.cleaning.max_line_length, 30);
    assert_eq!(parsed.cleaning.max_joined_length, 40);

    Ok(())
}
