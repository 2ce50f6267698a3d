//! The fixed set of sounds the game ships with.
//!
//! Each entry pairs an output name with a sound category and a duration.
//! Every category has fixed synthesis parameters.

use rand::RngCore;

use crate::error::{AudioError, AudioResult};
use crate::synthesis::{Explosion, Impact, Synthesizer};

/// Sound category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    /// Pitch-swept tone and noise with a linear fade.
    Explosion,
    /// Exponentially decayed bass tone.
    Impact,
}

impl SoundKind {
    /// Returns the string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundKind::Explosion => "explosion",
            SoundKind::Impact => "impact",
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundSpec {
    /// File stem, e.g. `explosion2`.
    pub name: String,
    /// Sound category.
    pub kind: SoundKind,
    /// Clip length in seconds.
    pub duration: f64,
}

impl SoundSpec {
    /// Creates a catalog entry.
    pub fn new(name: impl Into<String>, kind: SoundKind, duration: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            duration,
        }
    }

    /// Renders the raw (un-normalized) samples for this entry.
    pub fn render(&self, sample_rate: u32, rng: &mut dyn RngCore) -> Vec<f64> {
        match self.kind {
            SoundKind::Explosion => Explosion::new(self.duration).synthesize(sample_rate, rng),
            SoundKind::Impact => Impact::new(self.duration).synthesize(sample_rate, rng),
        }
    }

    /// File name of the uncompressed container.
    pub fn wav_file_name(&self) -> String {
        format!("{}.wav", self.name)
    }

    /// File name of the compressed output.
    pub fn mp3_file_name(&self) -> String {
        format!("{}.mp3", self.name)
    }
}

/// Number of explosion variants.
pub const EXPLOSION_VARIANTS: u32 = 3;

/// Impact clip length in seconds.
pub const IMPACT_DURATION: f64 = 0.2;

/// Duration of explosion variant `index` (1-based): `0.3 + 0.05 * index`.
///
/// Computed in hundredths so variants land on exact values (0.35, 0.40, 0.45).
pub fn explosion_duration(index: u32) -> f64 {
    (30 + 5 * index) as f64 / 100.0
}

/// The full set of sounds, in generation order.
pub fn default_catalog() -> Vec<SoundSpec> {
    let mut sounds: Vec<SoundSpec> = (1..=EXPLOSION_VARIANTS)
        .map(|i| {
            SoundSpec::new(
                format!("explosion{}", i),
                SoundKind::Explosion,
                explosion_duration(i),
            )
        })
        .collect();
    sounds.push(SoundSpec::new("impact", SoundKind::Impact, IMPACT_DURATION));
    sounds
}

/// Looks up a catalog entry by name.
pub fn find_sound(name: &str) -> AudioResult<SoundSpec> {
    default_catalog()
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| AudioError::unknown_sound(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use crate::wav::SAMPLE_RATE;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_contents() {
        let catalog = default_catalog();
        let names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["explosion1", "explosion2", "explosion3", "impact"]);

        assert_eq!(catalog[0].duration, 0.35);
        assert_eq!(catalog[1].duration, 0.4);
        assert_eq!(catalog[2].duration, 0.45);
        assert_eq!(catalog[3].duration, 0.2);
        assert_eq!(catalog[3].kind, SoundKind::Impact);
    }

    #[test]
    fn test_explosion_sample_counts_increase() {
        let mut rng = create_rng(42);
        let lengths: Vec<usize> = default_catalog()
            .iter()
            .filter(|s| s.kind == SoundKind::Explosion)
            .map(|s| s.render(SAMPLE_RATE, &mut rng).len())
            .collect();
        assert_eq!(lengths, vec![15435, 17640, 19845]);
    }

    #[test]
    fn test_file_names() {
        let impact = find_sound("impact").unwrap();
        assert_eq!(impact.wav_file_name(), "impact.wav");
        assert_eq!(impact.mp3_file_name(), "impact.mp3");
    }

    #[test]
    fn test_find_unknown_sound() {
        let err = find_sound("laser").unwrap_err();
        assert!(matches!(err, AudioError::UnknownSound { .. }));
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(SoundKind::Explosion.as_str(), "explosion");
        assert_eq!(SoundKind::Impact.as_str(), "impact");
    }
}
