use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Cleaning engine settings
    #[serde(default)]
    pub cleaning: CleaningConfig,

    /// Suffix appended to the file stem of derived output files
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings consumed by the text cleaner and line joiner
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CleaningConfig {
    /// Longest single line (in chars) still eligible for joining
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Longest joined result (in chars) still eligible for joining
    #[serde(default = "default_max_joined_length")]
    pub max_joined_length: usize,

    /// Glyph whose presence discards the whole entry as a song line
    #[serde(default = "default_song_marker")]
    pub song_marker: char,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            max_joined_length: default_max_joined_length(),
            song_marker: default_song_marker(),
        }
    }
}

/// Log level configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    Warn,
    /// Normal output
    #[default]
    Info,
    /// Verbose output
    Debug,
    /// Very verbose output
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

fn default_max_line_length() -> usize {
    30
}

fn default_max_joined_length() -> usize {
    40
}

fn default_song_marker() -> char {
    '\u{266a}'
}

fn default_output_suffix() -> String {
    "_clean".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cleaning: CleaningConfig::default(),
            output_suffix: default_output_suffix(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.cleaning.max_line_length == 0 {
            return Err(anyhow!("max_line_length must be greater than zero"));
        }

        if self.cleaning.max_joined_length == 0 {
            return Err(anyhow!("max_joined_length must be greater than zero"));
        }

        if self.cleaning.max_joined_length < self.cleaning.max_line_length {
            return Err(anyhow!(
                "max_joined_length {} is smaller than max_line_length {}",
                self.cleaning.max_joined_length,
                self.cleaning.max_line_length
            ));
        }

        if self.output_suffix.is_empty() {
            return Err(anyhow!(
                "output_suffix must not be empty, cleaned files would overwrite their source"
            ));
        }

        Ok(())
    }
}
