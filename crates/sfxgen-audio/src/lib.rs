//! sfxgen audio core
//!
//! Procedural synthesis of short game sound effects and their encoding as
//! mono 16-bit WAV files.
//!
//! # Overview
//!
//! - **Explosions** - a sine sweep from 800 Hz to 100 Hz mixed with white
//!   noise, fading linearly to silence
//! - **Impacts** - a 150 Hz bass tone with an exponential decay
//!
//! Generated buffers are peak-normalized to 0.95 of full scale, quantized to
//! 16-bit PCM and written at 44.1 kHz.
//!
//! # Randomness
//!
//! Noise-bearing generators take a `&mut dyn RngCore`. Pass
//! [`rng::create_rng`] for reproducible output or the thread RNG for a
//! slightly different sound on every run.
//!
//! # Example
//!
//! ```no_run
//! use sfxgen_audio::rng::create_rng;
//! use sfxgen_audio::synthesis::generate_explosion;
//! use sfxgen_audio::wav::{samples_to_wav, SAMPLE_RATE};
//!
//! let samples = generate_explosion(0.4, SAMPLE_RATE, &mut create_rng(42));
//! let result = samples_to_wav(&samples, "explosion.wav", SAMPLE_RATE)?;
//! println!("PCM hash: {}", result.pcm_hash);
//! # Ok::<(), sfxgen_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`catalog`] - The fixed list of sounds and their durations
//! - [`envelope`] - ADSR envelope shaping
//! - [`oscillator`] - Sine and noise generators
//! - [`rng`] - Seeded and process-wide random sources
//! - [`synthesis`] - Explosion and impact synthesizers
//! - [`wav`] - Normalization, quantization and WAV container writing

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use catalog::{default_catalog, find_sound, SoundKind, SoundSpec};
pub use error::{AudioError, AudioResult, BackendError};
pub use wav::{samples_to_wav, WavResult};
