/*!
 * Tests for application configuration functionality
 */

use log::LevelFilter;
use sctmark::app_config::{Config, LogLevel, RenderConfig};
use sctmark::errors::{AppError, ConfigError};
use sctmark::render::CloseMode;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.render.close_mode, CloseMode::Legacy);
    assert!(!config.render.convert_ansi);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Missing fields fall back to defaults
#[test]
fn test_fromJsonStr_withEmptyObject_shouldUseDefaults() {
    let config = Config::from_json_str("{}").expect("empty object should parse");
    assert_eq!(config, Config::default());
}

/// All fields are read
#[test]
fn test_fromJsonStr_withAllFields_shouldParse() {
    let json = r#"{
        "render": { "close_mode": "balanced", "convert_ansi": true },
        "log_level": "debug"
    }"#;
    let config = Config::from_json_str(json).expect("config should parse");

    assert_eq!(
        config.render,
        RenderConfig {
            close_mode: CloseMode::Balanced,
            convert_ansi: true,
        }
    );
    assert_eq!(config.log_level, LogLevel::Debug);
}

/// Unknown close mode is a parse error
#[test]
fn test_fromJsonStr_withInvalidCloseMode_shouldFail() {
    let result = Config::from_json_str(r#"{ "render": { "close_mode": "strict" } }"#);
    assert!(matches!(result, Err(AppError::Config(ConfigError::Parse(_)))));
}

/// Serialized config reads back the same
#[test]
fn test_config_serialization_shouldUseLowercaseNames() {
    let mut config = Config::default();
    config.render.close_mode = CloseMode::Balanced;
    config.log_level = LogLevel::Warn;

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""close_mode":"balanced""#));
    assert!(json.contains(r#""log_level":"warn""#));
    assert_eq!(Config::from_json_str(&json).unwrap(), config);
}

/// Log levels map onto log filters
#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), LevelFilter::Error);
    assert_eq!(LogLevel::Warn.to_level_filter(), LevelFilter::Warn);
    assert_eq!(LogLevel::Info.to_level_filter(), LevelFilter::Info);
    assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), LevelFilter::Trace);
}

/// Render options follow the render config
#[test]
fn test_renderConfig_renderOptions_shouldCarryCloseMode() {
    let config = RenderConfig {
        close_mode: CloseMode::Balanced,
        convert_ansi: false,
    };
    assert_eq!(config.render_options().close_mode, CloseMode::Balanced);
}
