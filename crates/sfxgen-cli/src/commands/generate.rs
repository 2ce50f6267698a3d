//! Generate command implementation
//!
//! Renders the sound catalog into an output directory and converts each file
//! to MP3 when an encoder is available.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxgen_audio::wav::SAMPLE_RATE;
use sfxgen_audio::{default_catalog, find_sound, BackendError, SoundSpec};
use sfxgen_transcode::{Transcoded, Transcoder, TranscoderConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, GenerateOutput, GeneratedSound, JsonError};
use crate::pipeline::{
    convert, final_path, init_output_dir, render_to_wav, Conversion, WrittenWav, DEFAULT_OUT_DIR,
};

/// Options for `sfxgen generate`.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output directory (default: `assets/sounds`)
    pub out_dir: Option<String>,
    /// Base seed for reproducible noise
    pub seed: Option<u32>,
    /// Sound names to generate (empty = whole catalog)
    pub sounds: Vec<String>,
    /// Keep WAV files, never run the encoder
    pub no_transcode: bool,
    /// Explicit ffmpeg executable
    pub ffmpeg: Option<String>,
    /// Encoder timeout in seconds
    pub encoder_timeout: Option<u64>,
}

impl GenerateOptions {
    fn out_dir(&self) -> PathBuf {
        PathBuf::from(self.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR))
    }

    fn transcoder(&self) -> Option<Transcoder> {
        if self.no_transcode {
            return None;
        }

        let mut config = TranscoderConfig::default();
        if let Some(ref path) = self.ffmpeg {
            config = config.ffmpeg_path(path);
        }
        if let Some(secs) = self.encoder_timeout {
            config = config.timeout_secs(secs);
        }
        Some(Transcoder::with_config(config))
    }

    /// Resolves the requested sounds against the catalog.
    fn selected_sounds(&self) -> Result<Vec<SoundSpec>, sfxgen_audio::AudioError> {
        if self.sounds.is_empty() {
            return Ok(default_catalog());
        }
        self.sounds.iter().map(|name| find_sound(name)).collect()
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 on fatal errors (output directory, file writes,
/// unknown sound names). Encoder problems are never fatal.
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();
    let out_dir = options.out_dir();
    let sounds = options.selected_sounds()?;

    println!("{}", "Generating sounds...".cyan().bold());
    println!("{} {}", "Output directory:".cyan().bold(), out_dir.display());
    if let Some(seed) = options.seed {
        println!("{} {}", "Seed:".dimmed(), seed);
    }
    println!();

    init_output_dir(&out_dir)?;

    let transcoder = options.transcoder();
    let mut encoder_missing_reported = false;

    for sound in &sounds {
        let wav = render_to_wav(sound, &out_dir, SAMPLE_RATE, options.seed)?;
        println!("  {} {}", "Created:".green(), wav.path.display());

        let conversion = convert(&wav, transcoder.as_ref());
        match &conversion {
            Conversion::Skipped => {}
            Conversion::Converted(done) => {
                println!("  {} {}", "Converted:".green(), done.mp3_path.display());
                if let Some(ref e) = done.wav_cleanup_error {
                    println!(
                        "  {} could not remove {}: {}",
                        "!!".yellow(),
                        wav.path.display(),
                        e
                    );
                }
            }
            Conversion::EncoderMissing => {
                // Same cause for every sound; say it once.
                if !encoder_missing_reported {
                    println!(
                        "  {} {}",
                        "info".blue(),
                        "FFmpeg not found, keeping WAV files".dimmed()
                    );
                    encoder_missing_reported = true;
                }
            }
            Conversion::EncoderFailed(e) => {
                println!(
                    "  {} {} conversion failed [{}]: {}",
                    "!!".yellow(),
                    sound.name,
                    e.code(),
                    e
                );
                println!(
                    "     {}",
                    format!("keeping {}", wav.path.display()).dimmed()
                );
            }
        }
    }

    println!();
    println!(
        "{} {} sounds generated in {:?}",
        "SUCCESS".green().bold(),
        sounds.len(),
        start.elapsed()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let out_dir = options.out_dir();
    let mut output = GenerateOutput {
        success: false,
        out_dir: out_dir.display().to_string(),
        seed: options.seed,
        sample_rate: SAMPLE_RATE,
        sounds: Vec::new(),
        errors: Vec::new(),
    };

    let sounds = match options.selected_sounds() {
        Ok(sounds) => sounds,
        Err(e) => {
            output
                .errors
                .push(JsonError::new(error_codes::UNKNOWN_SOUND, e.to_string()));
            return finish_json(&output);
        }
    };

    if let Err(e) = init_output_dir(&out_dir) {
        output
            .errors
            .push(JsonError::new(error_codes::OUTPUT_DIR, format!("{:#}", e)));
        return finish_json(&output);
    }

    let transcoder = options.transcoder();

    for sound in &sounds {
        match render_to_wav(sound, &out_dir, SAMPLE_RATE, options.seed) {
            Ok(wav) => {
                let conversion = convert(&wav, transcoder.as_ref());
                output.sounds.push(sound_to_json(&wav, &conversion));
            }
            Err(e) => {
                output.errors.push(
                    JsonError::new(error_codes::GENERATION_ERROR, format!("{:#}", e))
                        .with_sound(&sound.name),
                );
                return finish_json(&output);
            }
        }
    }

    output.success = true;
    finish_json(&output)
}

fn finish_json(output: &GenerateOutput) -> Result<ExitCode> {
    let json = serde_json::to_string_pretty(output).context("Failed to serialize JSON output")?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn sound_to_json(wav: &WrittenWav, conversion: &Conversion) -> GeneratedSound {
    let path = final_path(wav, conversion);
    let warning = match conversion {
        Conversion::EncoderFailed(e) => {
            Some(JsonError::new(e.code(), e.to_string()).with_sound(&wav.sound.name))
        }
        Conversion::Converted(Transcoded {
            wav_cleanup_error: Some(e),
            ..
        }) => Some(
            JsonError::new(
                error_codes::WAV_CLEANUP,
                format!("could not remove {}: {}", wav.path.display(), e),
            )
            .with_sound(&wav.sound.name),
        ),
        _ => None,
    };

    GeneratedSound {
        name: wav.sound.name.clone(),
        kind: wav.sound.kind.as_str().to_string(),
        duration_seconds: wav.sound.duration,
        num_samples: wav.num_samples,
        pcm_hash: wav.pcm_hash.clone(),
        path: path.display().to_string(),
        format: file_format(path).to_string(),
        conversion: conversion.status().to_string(),
        warning,
    }
}

fn file_format(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("wav")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options_for(dir: &Path) -> GenerateOptions {
        GenerateOptions {
            out_dir: Some(dir.display().to_string()),
            seed: Some(42),
            no_transcode: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_selected_sounds_defaults_to_catalog() {
        let names: Vec<String> = GenerateOptions::default()
            .selected_sounds()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["explosion1", "explosion2", "explosion3", "impact"]);
    }

    #[test]
    fn test_selected_sounds_rejects_unknown() {
        let options = GenerateOptions {
            sounds: vec!["impact".to_string(), "laser".to_string()],
            ..Default::default()
        };
        assert!(options.selected_sounds().is_err());
    }

    #[test]
    fn test_transcoder_disabled() {
        let options = GenerateOptions {
            no_transcode: true,
            ..Default::default()
        };
        assert!(options.transcoder().is_none());
    }

    #[test]
    fn test_transcoder_config_from_options() {
        let options = GenerateOptions {
            ffmpeg: Some("/opt/ffmpeg".to_string()),
            encoder_timeout: Some(7),
            ..Default::default()
        };
        let transcoder = options.transcoder().unwrap();
        assert_eq!(
            transcoder.config().ffmpeg_path,
            Some(PathBuf::from("/opt/ffmpeg"))
        );
        assert_eq!(transcoder.config().timeout.as_secs(), 7);
    }

    #[test]
    fn test_run_human_writes_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("assets").join("sounds");

        let code = run(&options_for(&out), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        for name in ["explosion1", "explosion2", "explosion3", "impact"] {
            assert!(out.join(format!("{}.wav", name)).exists(), "{} missing", name);
        }
    }

    #[test]
    fn test_run_json_selected_sound() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = options_for(dir.path());
        options.sounds = vec!["impact".to_string()];

        let code = run(&options, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(dir.path().join("impact.wav").exists());
        assert!(!dir.path().join("explosion1.wav").exists());
    }

    #[test]
    fn test_run_json_output_dir_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let code = run(&options_for(&blocker.join("sounds")), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_run_human_output_dir_failure_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        assert!(run(&options_for(&blocker.join("sounds")), false).is_err());
    }

    #[test]
    fn test_sound_to_json_for_missing_encoder() {
        let dir = tempfile::tempdir().unwrap();
        let sound = find_sound("impact").unwrap();
        let wav = render_to_wav(&sound, dir.path(), SAMPLE_RATE, Some(3)).unwrap();

        let json = sound_to_json(&wav, &Conversion::EncoderMissing);
        assert_eq!(json.name, "impact");
        assert_eq!(json.kind, "impact");
        assert_eq!(json.num_samples, 8820);
        assert_eq!(json.format, "wav");
        assert_eq!(json.conversion, "encoder_missing");
        assert_eq!(json.warning, None);
    }

    #[test]
    fn test_sound_to_json_reports_leftover_wav() {
        let dir = tempfile::tempdir().unwrap();
        let sound = find_sound("impact").unwrap();
        let wav = render_to_wav(&sound, dir.path(), SAMPLE_RATE, Some(3)).unwrap();

        let conversion = Conversion::Converted(Transcoded {
            mp3_path: dir.path().join("impact.mp3"),
            wav_cleanup_error: Some(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )),
        });
        let json = sound_to_json(&wav, &conversion);

        assert_eq!(json.conversion, "converted");
        assert_eq!(json.format, "mp3");
        let warning = json.warning.unwrap();
        assert_eq!(warning.code, error_codes::WAV_CLEANUP);
        assert!(warning.message.contains("read-only"));
    }

    #[test]
    fn test_file_format() {
        assert_eq!(file_format(Path::new("a/impact.mp3")), "mp3");
        assert_eq!(file_format(Path::new("a/impact.wav")), "wav");
        assert_eq!(file_format(Path::new("a/impact")), "wav");
    }
}
