//! Error types for the transcoder.

use std::path::PathBuf;

use sfxgen_audio::BackendError;
use thiserror::Error;

/// Result type for transcoder operations.
pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Errors that can occur while converting a WAV file.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// Encoder executable not found.
    #[error("ffmpeg not found. Install it and put it on PATH, or set SFXGEN_FFMPEG_BIN")]
    EncoderNotFound,

    /// Failed to spawn the encoder process.
    #[error("failed to spawn ffmpeg: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// Encoder process timed out and was killed.
    #[error("ffmpeg timed out after {timeout_ms} ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// Encoder process exited with non-zero status.
    #[error("ffmpeg exited with status {exit_code}: {stderr}")]
    ProcessFailed {
        /// Exit code (-1 when killed by a signal).
        exit_code: i32,
        /// Tail of the captured stderr.
        stderr: String,
    },

    /// Encoder reported success but produced no output.
    #[error("ffmpeg did not produce {}", .path.display())]
    OutputMissing {
        /// Expected output path.
        path: PathBuf,
    },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscodeError {
    /// Creates a new process failed error.
    pub fn process_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::ProcessFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// True when no encoder is installed.
    ///
    /// This is the expected fallback path; every other variant means an
    /// encoder exists but misbehaved.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, TranscodeError::EncoderNotFound)
    }
}

impl BackendError for TranscodeError {
    fn code(&self) -> &'static str {
        match self {
            TranscodeError::EncoderNotFound => "TRANSCODE_001",
            TranscodeError::SpawnFailed(_) => "TRANSCODE_002",
            TranscodeError::Timeout { .. } => "TRANSCODE_003",
            TranscodeError::ProcessFailed { .. } => "TRANSCODE_004",
            TranscodeError::OutputMissing { .. } => "TRANSCODE_005",
            TranscodeError::Io(_) => "TRANSCODE_006",
        }
    }

    fn category(&self) -> &'static str {
        "transcode"
    }
}
