//! Error handling for step sequences and frame export

use std::io;
use thiserror::Error;

/// Errors that can occur while loading, synthesizing or exporting footwork
#[derive(Debug, Error)]
pub enum FootworkError {
    /// A step record is missing a required field or carries conflicting ones
    #[error("Invalid step record at index {index}: {reason}")]
    InvalidStep {
        /// Zero-based position of the record in its sequence
        index: usize,
        /// What is wrong with the record
        reason: String,
    },

    /// A sequence document has the wrong overall shape
    #[error("Invalid sequence document: {0}")]
    InvalidDocument(String),

    /// Playback configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The sequence document is not valid YAML or has the wrong shape
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing or serialization failed
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed
    #[cfg(feature = "csv_export")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Frame tracks handed to playback have different lengths
    #[error(
        "Frame tracks differ in length: left {left}, right {right}, center {center}, facing {facing}"
    )]
    MisalignedTracks {
        /// Left foot track length
        left: usize,
        /// Right foot track length
        right: usize,
        /// Centre-of-gravity track length
        center: usize,
        /// Facing track length
        facing: usize,
    },

    /// A renderer rejected a frame
    #[error("Render error: {0}")]
    Render(String),
}

impl FootworkError {
    /// Shorthand for an [`FootworkError::InvalidStep`]
    pub(crate) fn invalid_step(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidStep {
            index,
            reason: reason.into(),
        }
    }
}

/// Type alias for Results from footwork operations
pub type Result<T> = std::result::Result<T, FootworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FootworkError::invalid_step(3, "missing facing angle 'F'");
        assert_eq!(
            format!("{}", error),
            "Invalid step record at index 3: missing facing angle 'F'"
        );

        let error = FootworkError::InvalidConfig("fps must be positive".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid configuration: fps must be positive"
        );
    }
}
