//! Random sources for noise synthesis.
//!
//! Generators never reach for a global RNG themselves; they take a
//! `&mut dyn RngCore`. Production runs hand them the thread RNG so every run
//! sounds a little different, while a seed yields byte-identical output.
//! Seeded streams use PCG32 with per-sound seeds derived through BLAKE3.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named sound from the base seed.
///
/// Hashes `base_seed` (little-endian) followed by the UTF-8 name with BLAKE3
/// and keeps the first four bytes, so each sound gets an independent stream.
pub fn derive_sound_seed(base_seed: u32, name: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + name.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(name.as_bytes());

    let hash = blake3::hash(&input);

    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    u32::from_le_bytes(bytes)
}

/// Creates the RNG for one sound.
///
/// With a base seed the stream is deterministic; without one the
/// process-wide thread RNG is used.
pub fn sound_rng(base_seed: Option<u32>, name: &str) -> Box<dyn RngCore> {
    match base_seed {
        Some(seed) => Box::new(create_rng(derive_sound_seed(seed, name))),
        None => Box::new(rand::thread_rng()),
    }
}
