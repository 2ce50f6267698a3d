//! Impact synthesis.
//!
//! A 150 Hz bass tone under an `exp(-5 · progress)` decay, scaled to 0.8.

use rand::RngCore;

use crate::oscillator::{num_samples, sine, TWO_PI};

use super::{time_and_progress, Synthesizer};

/// Impact synthesizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Impact {
    /// Clip length in seconds.
    pub duration: f64,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Exponential decay constant over the clip.
    pub decay_rate: f64,
    /// Output gain.
    pub gain: f64,
}

impl Impact {
    /// Creates an impact of the given length.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            frequency: 150.0,
            decay_rate: 5.0,
            gain: 0.8,
        }
    }

    /// Renders the clip. Impacts contain no noise, so no random source is needed.
    pub fn render(&self, sample_rate: u32) -> Vec<f64> {
        (0..num_samples(self.duration, sample_rate))
            .map(|i| {
                let (t, progress) = time_and_progress(i, sample_rate, self.duration);
                let envelope = (-self.decay_rate * progress).exp();
                sine(TWO_PI * self.frequency * t) * envelope * self.gain
            })
            .collect()
    }
}

impl Synthesizer for Impact {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn synthesize(&self, sample_rate: u32, _rng: &mut dyn RngCore) -> Vec<f64> {
        self.render(sample_rate)
    }
}

/// Generates an impact clip of `duration` seconds.
pub fn generate_impact(duration: f64, sample_rate: u32) -> Vec<f64> {
    Impact::new(duration).render(sample_rate)
}
