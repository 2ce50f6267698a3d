//! Encoded container result and the file-writing entry point.

use std::path::Path;

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;
use super::normalize::normalize;
use super::writer::{quantize_pcm16, write_wav_to_vec};

/// An encoded mono WAV container.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of sample frames.
    pub num_samples: usize,
}

impl WavResult {
    /// Normalizes, quantizes and encodes `samples` in memory.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = quantize_pcm16(&normalize(samples));
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Size of the PCM payload in bytes.
    pub fn data_len(&self) -> usize {
        self.num_samples * 2
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Encodes `samples` as a mono 16-bit WAV and writes it to `path`.
///
/// The buffer is peak-normalized to 0.95 of full scale before quantization.
/// Empty and silent inputs produce a valid (silent) container.
///
/// # Errors
/// `InvalidSampleRate` for a zero rate, `Io` if the file cannot be written.
pub fn samples_to_wav(
    samples: &[f64],
    path: impl AsRef<Path>,
    sample_rate: u32,
) -> AudioResult<WavResult> {
    if sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate { rate: sample_rate });
    }

    let result = WavResult::from_mono(samples, sample_rate);
    std::fs::write(path.as_ref(), &result.wav_data)?;
    Ok(result)
}
