//! Peak normalization.

/// Target peak level after normalization, just under full scale.
pub const NORMALIZE_CEILING: f64 = 0.95;

/// Largest absolute sample value.
///
/// An empty buffer reports a peak of 1.0 so callers never divide by zero.
pub fn peak_amplitude(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 1.0;
    }
    samples.iter().fold(0.0_f64, |peak, s| peak.max(s.abs()))
}

/// Rescales `samples` so the peak sits at [`NORMALIZE_CEILING`].
///
/// Silent (all-zero) and empty buffers are returned unchanged.
pub fn normalize(samples: &[f64]) -> Vec<f64> {
    let peak = peak_amplitude(samples);
    if peak > 0.0 {
        let gain = NORMALIZE_CEILING / peak;
        samples.iter().map(|s| s * gain).collect()
    } else {
        samples.to_vec()
    }
}
