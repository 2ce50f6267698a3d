//! Error types for the audio core.

use thiserror::Error;

/// Trait implemented by every error type that surfaces through the CLI.
///
/// Provides a stable code and a category so failures can be reported
/// uniformly in both human and JSON output.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "TRANSCODE_002".
    /// These codes are stable and can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during sound synthesis and encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Unknown sound name requested from the catalog.
    #[error("unknown sound '{name}'")]
    UnknownSound {
        /// Requested name.
        name: String,
    },

    /// I/O error while writing a container.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an unknown sound error.
    pub fn unknown_sound(name: impl Into<String>) -> Self {
        Self::UnknownSound { name: name.into() }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::UnknownSound { .. } => "AUDIO_002",
            AudioError::Io(_) => "AUDIO_003",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
