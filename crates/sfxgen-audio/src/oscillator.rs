//! Basic waveform generators.
//!
//! All generators produce mono `f64` buffers with values in [-1.0, 1.0],
//! one value per `1 / sample_rate` seconds.

use std::f64::consts::PI;

use rand::{Rng, RngCore};

/// 2π, used for phase calculations.
pub const TWO_PI: f64 = 2.0 * PI;

/// Number of samples covering `duration` seconds at `sample_rate`.
///
/// Rounds to the nearest sample so that e.g. 0.35 s at 44.1 kHz is 15435
/// samples. Non-positive or non-finite durations yield zero.
pub fn num_samples(duration: f64, sample_rate: u32) -> usize {
    if !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    (duration * sample_rate as f64).round() as usize
}

/// Sine value at `phase` radians.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// One uniform random value in [-1.0, 1.0].
#[inline]
pub fn white_noise(rng: &mut dyn RngCore) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

/// Generates a pure tone: `sample[i] = sin(2π·f·i / sample_rate)`.
pub fn generate_sine_wave(frequency: f64, duration: f64, sample_rate: u32) -> Vec<f64> {
    let rate = sample_rate as f64;
    (0..num_samples(duration, sample_rate))
        .map(|i| sine(TWO_PI * frequency * i as f64 / rate))
        .collect()
}

/// Generates white noise: independent uniform values in [-1.0, 1.0].
pub fn generate_noise(duration: f64, sample_rate: u32, rng: &mut dyn RngCore) -> Vec<f64> {
    (0..num_samples(duration, sample_rate))
        .map(|_| white_noise(rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_num_samples_rounds() {
        assert_eq!(num_samples(0.35, 44100), 15435);
        assert_eq!(num_samples(0.2, 44100), 8820);
        assert_eq!(num_samples(1.0, 22050), 22050);
    }

    #[test]
    fn test_num_samples_degenerate_durations() {
        assert_eq!(num_samples(0.0, 44100), 0);
        assert_eq!(num_samples(-0.5, 44100), 0);
        assert_eq!(num_samples(f64::NAN, 44100), 0);
        assert_eq!(num_samples(f64::INFINITY, 44100), 0);
    }

    #[test]
    fn test_sine_wave_values() {
        // 1 Hz at 4 samples/sec hits 0, 1, 0, -1.
        let wave = generate_sine_wave(1.0, 1.0, 4);
        assert_eq!(wave.len(), 4);
        assert!(wave[0].abs() < 1e-12);
        assert!((wave[1] - 1.0).abs() < 1e-12);
        assert!(wave[2].abs() < 1e-12);
        assert!((wave[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sine_wave_empty_for_zero_duration() {
        assert!(generate_sine_wave(440.0, 0.0, 44100).is_empty());
    }

    #[test]
    fn test_noise_range_and_length() {
        let mut rng = create_rng(42);
        let noise = generate_noise(0.1, 44100, &mut rng);
        assert_eq!(noise.len(), 4410);
        assert!(noise.iter().all(|s| (-1.0..=1.0).contains(s)));
        // Not a constant signal
        assert!(noise.iter().any(|&s| s != noise[0]));
    }

    #[test]
    fn test_noise_deterministic_with_same_seed() {
        let a = generate_noise(0.01, 44100, &mut create_rng(9));
        let b = generate_noise(0.01, 44100, &mut create_rng(9));
        assert_eq!(a, b);
    }
}
