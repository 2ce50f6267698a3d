//! Mono 16-bit PCM WAV encoding.
//!
//! This module peak-normalizes sample buffers, quantizes them to 16-bit
//! signed little-endian PCM and wraps the result in a canonical RIFF/WAVE
//! container with no timestamps or other variable metadata.

mod format;
mod normalize;
mod result;
mod writer;


pub use format::{WavFormat, SAMPLE_RATE};
pub use normalize::{normalize, peak_amplitude, NORMALIZE_CEILING};
pub use result::{samples_to_wav, WavResult};
pub use writer::{quantize_pcm16, write_wav, write_wav_to_vec};
