//! Sound-category synthesizers.
//!
//! Each module implements one fixed sound category:
//! - `explosion` - Downward pitch sweep mixed with white noise, linear fade-out
//! - `impact` - Low bass tone with exponential decay
//!
//! Both bake their amplitude decay directly into the waveform instead of
//! going through [`crate::envelope`].

pub mod explosion;
pub mod impact;

use rand::RngCore;

pub use explosion::{generate_explosion, Explosion};
pub use impact::{generate_impact, Impact};

/// Common trait for all sound-category synthesizers.
pub trait Synthesizer {
    /// Clip length in seconds.
    fn duration(&self) -> f64;

    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Random source for any noise component
    ///
    /// # Returns
    /// `num_samples(duration, sample_rate)` samples in range [-1.0, 1.0]
    fn synthesize(&self, sample_rate: u32, rng: &mut dyn RngCore) -> Vec<f64>;
}

/// Linear frequency sweep parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencySweep {
    /// Starting frequency in Hz.
    pub start_freq: f64,
    /// Ending frequency in Hz.
    pub end_freq: f64,
}

impl FrequencySweep {
    /// Creates a new frequency sweep.
    pub fn new(start_freq: f64, end_freq: f64) -> Self {
        Self {
            start_freq,
            end_freq,
        }
    }

    /// Gets the frequency at a given progress point (0.0 to 1.0).
    pub fn at(&self, progress: f64) -> f64 {
        self.start_freq - (self.start_freq - self.end_freq) * progress
    }
}

/// Elapsed time and clip progress for sample `index`.
///
/// Returns `(t, t / duration)`; callers only ask for indices inside a
/// non-empty clip, so `duration` is positive.
#[inline]
pub(crate) fn time_and_progress(index: usize, sample_rate: u32, duration: f64) -> (f64, f64) {
    let t = index as f64 / sample_rate as f64;
    (t, t / duration)
}
