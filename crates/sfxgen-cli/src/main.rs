//! sfxgen CLI - procedural sound effects for games
//!
//! Writes explosion and impact clips as MP3 (or WAV when no encoder is
//! installed) into an asset directory.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use sfxgen_cli::commands;
use sfxgen_cli::commands::generate::GenerateOptions;

/// sfxgen - Procedural Game Sound Effects
#[derive(Parser)]
#[command(name = "sfxgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sound catalog
    Generate {
        /// Output directory (default: assets/sounds)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Base seed for reproducible noise (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Only generate these sounds (repeatable, e.g. --sound impact)
        #[arg(long = "sound", value_name = "NAME")]
        sounds: Vec<String>,

        /// Keep WAV files and skip MP3 conversion
        #[arg(long)]
        no_transcode: bool,

        /// Path to the ffmpeg executable (overrides SFXGEN_FFMPEG_BIN and PATH)
        #[arg(long)]
        ffmpeg: Option<String>,

        /// Seconds to wait for a single conversion before killing the encoder
        #[arg(long, value_name = "SECS")]
        encoder_timeout: Option<u64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check encoder availability and configuration
    Doctor {
        /// Path to the ffmpeg executable to check
        #[arg(long)]
        ffmpeg: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            seed,
            sounds,
            no_transcode,
            ffmpeg,
            encoder_timeout,
            json,
        } => {
            let options = GenerateOptions {
                out_dir,
                seed,
                sounds,
                no_transcode,
                ffmpeg,
                encoder_timeout,
            };
            commands::generate::run(&options, json)
        }
        Commands::Doctor { ffmpeg } => commands::doctor::run(ffmpeg.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
