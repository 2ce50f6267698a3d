//! Explosion synthesis.
//!
//! A sine tone sweeping linearly from 800 Hz down to 100 Hz, mixed 70/30
//! with white noise, with the whole mix fading linearly to silence over the
//! clip.

use rand::RngCore;

use crate::oscillator::{num_samples, sine, white_noise, TWO_PI};

use super::{time_and_progress, FrequencySweep, Synthesizer};

/// Explosion synthesizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    /// Clip length in seconds.
    pub duration: f64,
    /// Tone sweep (800 Hz -> 100 Hz).
    pub sweep: FrequencySweep,
    /// Weight of the swept tone.
    pub tone_mix: f64,
    /// Weight of the noise component.
    pub noise_mix: f64,
}

impl Explosion {
    /// Starting frequency of the sweep in Hz.
    pub const START_FREQ: f64 = 800.0;
    /// Ending frequency of the sweep in Hz.
    pub const END_FREQ: f64 = 100.0;

    /// Creates an explosion of the given length.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            sweep: FrequencySweep::new(Self::START_FREQ, Self::END_FREQ),
            tone_mix: 0.7,
            noise_mix: 0.3,
        }
    }
}

impl Synthesizer for Explosion {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn synthesize(&self, sample_rate: u32, rng: &mut dyn RngCore) -> Vec<f64> {
        (0..num_samples(self.duration, sample_rate))
            .map(|i| {
                let (t, progress) = time_and_progress(i, sample_rate, self.duration);
                let freq = self.sweep.at(progress);

                let tone = sine(TWO_PI * freq * t);
                let noise = white_noise(rng);

                (tone * self.tone_mix + noise * self.noise_mix) * (1.0 - progress)
            })
            .collect()
    }
}

/// Generates an explosion clip of `duration` seconds.
pub fn generate_explosion(duration: f64, sample_rate: u32, rng: &mut dyn RngCore) -> Vec<f64> {
    Explosion::new(duration).synthesize(sample_rate, rng)
}
