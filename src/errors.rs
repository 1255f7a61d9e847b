/*!
 * Error types for the subsweep application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during subtitle parsing and serialization
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// Error when no valid entries could be parsed from a source
    #[error("No valid subtitle entries were found in the SRT content")]
    NoEntries,

    /// Error for an entry with an invalid time range or empty text
    #[error("Invalid subtitle entry {seq_num}: {reason}")]
    InvalidEntry {
        /// Sequence number of the offending entry
        seq_num: usize,
        /// What made the entry invalid
        reason: String,
    },

    /// Error when a timestamp cannot be parsed
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),
}

/// Errors that can occur while listing or extracting container tracks
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Error when the external tool cannot be executed at all
    #[error("Failed to execute {tool}: {message}")]
    ToolUnavailable {
        /// Tool binary name
        tool: String,
        /// Underlying failure
        message: String,
    },

    /// Error when the external tool ran but reported failure
    #[error("{tool} failed: {message}")]
    ToolFailed {
        /// Tool binary name
        tool: String,
        /// Filtered stderr of the tool
        message: String,
    },

    /// Error when a single track could not be extracted
    #[error("Failed to extract track {track_id}: {message}")]
    TrackFailed {
        /// Track index within the container
        track_id: usize,
        /// What went wrong
        message: String,
    },

    /// Error when the external tool did not finish in time
    #[error("{tool} timed out after {seconds} seconds")]
    Timeout {
        /// Tool binary name
        tool: String,
        /// Timeout that elapsed
        seconds: u64,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from track extraction
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
