//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_default_codec_config_is_valid() {
    tracing::debug!("Testing default codec configuration");

    let config = CodecConfig::default();
    assert!(config.fold_lines);
    assert_eq!(config.max_line_octets, 75);
    assert!(config.validate().is_ok());
}

#[test]
fn test_codec_config_rejects_narrow_width() {
    let config = CodecConfig {
        fold_lines: true,
        max_line_octets: 4,
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("max_line_octets"));
}

#[test]
fn test_codec_config_rejects_wide_width() {
    let config = CodecConfig {
        fold_lines: false,
        max_line_octets: 5000,
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_codec_config_bounds_are_inclusive() {
    for width in [MIN_LINE_OCTETS, MAX_LINE_OCTETS] {
        let config = CodecConfig {
            fold_lines: true,
            max_line_octets: width,
        };
        assert!(config.validate().is_ok(), "width {width} should be accepted");
    }
}

#[test]
fn test_settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.logging.level, "info");
    assert!(settings.codec.fold_lines);

    let cloned = settings.clone();
    assert_eq!(cloned.codec.max_line_octets, settings.codec.max_line_octets);
}

#[test]
fn test_settings_debug() {
    let settings = Settings::default();

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("codec"));
    assert!(debug_str.contains("logging"));
}
