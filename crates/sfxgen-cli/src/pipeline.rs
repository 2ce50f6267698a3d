//! Sound generation pipeline.
//!
//! One pass per catalog entry: render samples, write `<name>.wav`, then try
//! to convert it to `<name>.mp3`. Whatever the converter does, the caller
//! ends up with exactly one playable file per sound.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sfxgen_audio::rng::sound_rng;
use sfxgen_audio::{samples_to_wav, BackendError, SoundSpec};
use sfxgen_transcode::{TranscodeError, Transcoded, Transcoder};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "assets/sounds";

/// Creates the output directory (and parents) if missing.
///
/// Idempotent: an existing directory is not an error.
pub fn init_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// A WAV file written for one sound.
#[derive(Debug, Clone)]
pub struct WrittenWav {
    /// Catalog entry that produced it.
    pub sound: SoundSpec,
    /// Path of the WAV file.
    pub path: PathBuf,
    /// Number of sample frames.
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// Renders `sound` and writes `<out_dir>/<name>.wav`.
///
/// With a base seed the noise stream is derived from it and the sound name;
/// without one the thread RNG is used.
pub fn render_to_wav(
    sound: &SoundSpec,
    out_dir: &Path,
    sample_rate: u32,
    seed: Option<u32>,
) -> Result<WrittenWav> {
    let mut rng = sound_rng(seed, &sound.name);
    let samples = sound.render(sample_rate, rng.as_mut());

    let path = out_dir.join(sound.wav_file_name());
    let result = samples_to_wav(&samples, &path, sample_rate)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(WrittenWav {
        sound: sound.clone(),
        path,
        num_samples: result.num_samples,
        pcm_hash: result.pcm_hash,
    })
}

/// What happened when converting a WAV file.
#[derive(Debug)]
pub enum Conversion {
    /// Conversion was disabled.
    Skipped,
    /// MP3 written. The WAV is removed unless `wav_cleanup_error` is set.
    Converted(Transcoded),
    /// No encoder installed; WAV kept.
    EncoderMissing,
    /// Encoder present but failed; WAV kept.
    EncoderFailed(TranscodeError),
}

impl Conversion {
    /// Short machine-readable status.
    pub fn status(&self) -> &'static str {
        match self {
            Conversion::Skipped => "skipped",
            Conversion::Converted(_) => "converted",
            Conversion::EncoderMissing => "encoder_missing",
            Conversion::EncoderFailed(_) => "encoder_failed",
        }
    }

    /// Stable error code for failed conversions.
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Conversion::EncoderFailed(e) => Some(e.code()),
            _ => None,
        }
    }
}

/// Converts `wav` to MP3 next to it, classifying the outcome.
///
/// Never fails: every encoder problem falls back to keeping the WAV.
pub fn convert(wav: &WrittenWav, transcoder: Option<&Transcoder>) -> Conversion {
    let Some(transcoder) = transcoder else {
        return Conversion::Skipped;
    };

    let mp3 = wav.path.with_file_name(wav.sound.mp3_file_name());
    match transcoder.transcode(&wav.path, &mp3) {
        Ok(done) => Conversion::Converted(done),
        Err(e) if e.is_unavailable() => Conversion::EncoderMissing,
        Err(e) => Conversion::EncoderFailed(e),
    }
}

/// Final file for a sound given its conversion outcome.
pub fn final_path<'a>(wav: &'a WrittenWav, conversion: &'a Conversion) -> &'a Path {
    match conversion {
        Conversion::Converted(done) => &done.mp3_path,
        _ => &wav.path,
    }
}
