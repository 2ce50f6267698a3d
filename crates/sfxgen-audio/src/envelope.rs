//! ADSR envelope shaping.
//!
//! This module builds an Attack-Decay-Sustain-Release gain curve for a
//! buffer of known length and multiplies it into the samples. The concrete
//! explosion and impact generators bake their own decay in, so this is used
//! for generic tones.

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.3,
            release: 0.2,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters.
    ///
    /// Negative times are treated as zero and the sustain level is clamped
    /// to the unit interval.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }
}

/// Sample counts of the four envelope segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeSegments {
    /// Attack ramp length (0 -> 1).
    pub attack: usize,
    /// Decay ramp length (1 -> sustain).
    pub decay: usize,
    /// Flat sustain length.
    pub sustain: usize,
    /// Release ramp length (sustain -> 0).
    pub release: usize,
    /// Length of the buffer the envelope is applied to.
    pub total: usize,
}

impl EnvelopeSegments {
    /// Computes segment lengths for a buffer of `total` samples.
    ///
    /// Times are converted by truncating `seconds * sample_rate`. Sustain
    /// takes whatever is left and is zero when attack, decay and release
    /// already overrun the buffer.
    pub fn compute(params: &AdsrParams, total: usize, sample_rate: u32) -> Self {
        let rate = sample_rate as f64;
        let to_samples = |seconds: f64| (seconds.max(0.0) * rate) as usize;

        let attack = to_samples(params.attack);
        let decay = to_samples(params.decay);
        let release = to_samples(params.release);
        let sustain = total.saturating_sub(attack + decay + release);

        Self {
            attack,
            decay,
            sustain,
            release,
            total,
        }
    }

    /// Returns true when attack + decay + release exceed the buffer.
    ///
    /// In that case the curve is cut at `total` and the tail of the ramps
    /// (release first) never plays.
    pub fn is_degenerate(&self) -> bool {
        self.attack + self.decay + self.release > self.total
    }
}

/// Builds the gain curve for a buffer of `total` samples.
///
/// The result always has exactly `total` entries.
pub fn envelope_curve(params: &AdsrParams, total: usize, sample_rate: u32) -> Vec<f64> {
    let seg = EnvelopeSegments::compute(params, total, sample_rate);
    let sustain_level = params.sustain;

    let mut curve = Vec::with_capacity(seg.attack + seg.decay + seg.sustain + seg.release);

    curve.extend((0..seg.attack).map(|i| i as f64 / seg.attack as f64));
    curve.extend(
        (0..seg.decay).map(|i| 1.0 - (i as f64 / seg.decay as f64) * (1.0 - sustain_level)),
    );
    curve.extend(std::iter::repeat(sustain_level).take(seg.sustain));
    curve.extend((0..seg.release).map(|i| sustain_level * (1.0 - i as f64 / seg.release as f64)));

    curve.truncate(total);
    curve
}

/// Multiplies `samples` element-wise by an ADSR curve.
///
/// Output length always equals input length.
pub fn apply_envelope(samples: &[f64], params: &AdsrParams, sample_rate: u32) -> Vec<f64> {
    let curve = envelope_curve(params, samples.len(), sample_rate);
    samples.iter().zip(curve).map(|(s, e)| s * e).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_adsr_default() {
        let params = AdsrParams::default();
        assert_eq!(params.attack, 0.01);
        assert_eq!(params.decay, 0.1);
        assert_eq!(params.sustain, 0.3);
        assert_eq!(params.release, 0.2);
    }

    #[test]
    fn test_new_clamps_inputs() {
        let params = AdsrParams::new(-1.0, 0.1, 1.5, -0.2);
        assert_eq!(params.attack, 0.0);
        assert_eq!(params.sustain, 1.0);
        assert_eq!(params.release, 0.0);
    }

    #[test]
    fn test_segments_sum_to_total() {
        let params = AdsrParams::new(0.01, 0.02, 0.5, 0.03);
        let seg = EnvelopeSegments::compute(&params, 1000, 10_000);

        assert_eq!(seg.attack, 100);
        assert_eq!(seg.decay, 200);
        assert_eq!(seg.release, 300);
        assert_eq!(seg.sustain, 400);
        assert_eq!(seg.attack + seg.decay + seg.sustain + seg.release, 1000);
        assert!(!seg.is_degenerate());
    }

    #[test]
    fn test_curve_shape() {
        // 1 kHz keeps the arithmetic readable: 10 samples attack, 10 decay,
        // 10 release, 20 sustain.
        let params = AdsrParams::new(0.01, 0.01, 0.5, 0.01);
        let curve = envelope_curve(&params, 50, 1000);

        assert_eq!(curve.len(), 50);
        assert_eq!(curve[0], 0.0);
        assert!((curve[5] - 0.5).abs() < 1e-12);
        // Decay starts at full scale
        assert_eq!(curve[10], 1.0);
        assert!((curve[15] - 0.75).abs() < 1e-12);
        // Sustain plateau
        assert!(curve[20..40].iter().all(|&g| g == 0.5));
        // Release ramps toward zero
        assert_eq!(curve[40], 0.5);
        assert!((curve[49] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_apply_preserves_length() {
        let samples = vec![1.0; 44100];
        let shaped = apply_envelope(&samples, &AdsrParams::default(), 44100);
        assert_eq!(shaped.len(), samples.len());
        assert!(shaped.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_degenerate_envelope_truncates_curve_not_samples() {
        // Default envelope needs 0.31 s; give it only 0.1 s.
        let samples = vec![1.0; 4410];
        let seg = EnvelopeSegments::compute(&AdsrParams::default(), samples.len(), 44100);
        assert!(seg.is_degenerate());
        assert_eq!(seg.sustain, 0);

        let shaped = apply_envelope(&samples, &AdsrParams::default(), 44100);
        assert_eq!(shaped.len(), 4410);
        // Attack (441 samples) completes, then the decay ramp is cut short.
        assert_eq!(shaped[441], 1.0);
        assert!(shaped[4409] < 1.0);
        assert!(shaped[4409] > 0.3);
    }

    #[test]
    fn test_zero_length_segments_do_not_divide_by_zero() {
        let params = AdsrParams::new(0.0, 0.0, 0.8, 0.0);
        let curve = envelope_curve(&params, 10, 44100);
        assert_eq!(curve, vec![0.8; 10]);
    }

    #[test]
    fn test_empty_input() {
        let shaped = apply_envelope(&[], &AdsrParams::default(), 44100);
        assert!(shaped.is_empty());
    }
}
