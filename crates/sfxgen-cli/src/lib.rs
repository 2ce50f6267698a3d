//! sfxgen CLI library.
//!
//! This crate drives the sound-generation pipeline: output directory
//! initialization, synthesis of the fixed sound catalog, WAV encoding and
//! optional MP3 conversion, plus the `doctor` environment check.

pub mod commands;
pub mod pipeline;
