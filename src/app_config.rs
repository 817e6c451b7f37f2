use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::{AppError, ConfigError};
use crate::render::{CloseMode, RenderOptions};

/// Application configuration module
/// This module handles loading the renderer and logging settings from a
/// JSON file, falling back to defaults when no file is present.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Render settings
    #[serde(default)]
    pub render: RenderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Render settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RenderConfig {
    // @field: Close tag policy
    #[serde(default)]
    pub close_mode: CloseMode,

    // @field: Convert ANSI styling before escaping
    #[serde(default)]
    pub convert_ansi: bool,
}

impl RenderConfig {
    // @returns: Options for a Renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            close_mode: self.close_mode,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)
            .map_err(|e| AppError::File(format!("{}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)).into())
    }

    /// Load a configuration file, or the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found at '{}', using defaults.", path.display());
            Ok(Self::default())
        }
    }
}
