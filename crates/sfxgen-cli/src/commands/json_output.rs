//! JSON output types for machine-readable CLI output.
//!
//! Used by `sfxgen generate --json` so build scripts can tell which files
//! were produced and in what format.

use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures.
pub mod error_codes {
    /// Output directory could not be created
    pub const OUTPUT_DIR: &str = "CLI_001";
    /// Sound could not be rendered or written
    pub const GENERATION_ERROR: &str = "CLI_002";
    /// Unknown sound name requested
    pub const UNKNOWN_SOUND: &str = "CLI_003";
    /// MP3 written but the intermediate WAV could not be removed
    pub const WAV_CLEANUP: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "TRANSCODE_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Sound the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            sound: None,
        }
    }

    /// Attaches the related sound name.
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }
}

/// One generated sound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedSound {
    /// Catalog name (file stem)
    pub name: String,
    /// Sound category ("explosion" or "impact")
    pub kind: String,
    /// Clip length in seconds
    pub duration_seconds: f64,
    /// Number of sample frames
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
    /// Final output file
    pub path: String,
    /// Final output format ("mp3" or "wav")
    pub format: String,
    /// Conversion status ("converted", "skipped", "encoder_missing", "encoder_failed")
    pub conversion: String,
    /// Encoder failure or WAV cleanup details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<JsonError>,
}

/// Top-level output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    /// Whether every sound was written
    pub success: bool,
    /// Output directory
    pub out_dir: String,
    /// Base seed, if one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Sample rate of every file
    pub sample_rate: u32,
    /// Sounds written, in generation order
    pub sounds: Vec<GeneratedSound>,
    /// Fatal errors
    pub errors: Vec<JsonError>,
}
