//! Doctor command implementation
//!
//! Checks whether an MP3 encoder can be found.

use anyhow::Result;
use colored::Colorize;
use sfxgen_transcode::{TranscodeError, Transcoder, TranscoderConfig, FFMPEG_ENV_VAR};
use std::process::ExitCode;

/// Run the doctor command
///
/// # Returns
/// Always exit code 0: without an encoder sounds are kept as WAV files.
pub fn run(ffmpeg: Option<&str>) -> Result<ExitCode> {
    println!("{}", "sfxgen doctor".cyan().bold());
    println!("{}", "=============".cyan());
    println!();

    println!("{}", "Versions:".bold());
    println!("  {} sfxgen v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("{}", "Dependencies:".bold());
    let mut config = TranscoderConfig::default();
    if let Some(path) = ffmpeg {
        config = config.ffmpeg_path(path);
    }
    let transcoder = Transcoder::with_config(config);

    match transcoder.encoder_version() {
        Ok(version) => {
            let location = transcoder
                .find_ffmpeg()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            println!("  {} {} ({})", "ok".green(), version, location);
        }
        Err(TranscodeError::EncoderNotFound) => {
            println!("  {} ffmpeg not found", "!!".yellow());
            println!(
                "     {}",
                "Sounds will be written as WAV instead of MP3.".dimmed()
            );
            println!(
                "     {}",
                format!(
                    "Install ffmpeg, add it to PATH, or set {}=/path/to/ffmpeg",
                    FFMPEG_ENV_VAR
                )
                .dimmed()
            );
        }
        Err(e) => {
            println!("  {} ffmpeg check failed: {}", "!!".red(), e);
        }
    }

    println!();
    println!("{}", "Configuration:".bold());
    println!(
        "  {} quality -q:a {}, timeout {}s",
        "->".green(),
        transcoder.config().quality,
        transcoder.config().timeout.as_secs()
    );

    Ok(ExitCode::SUCCESS)
}
