//! sfxgen transcoder
//!
//! Converts generated WAV files to MP3 by running ffmpeg as a subprocess.
//! ffmpeg is optional: when it cannot be found the caller keeps the WAV file.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use sfxgen_transcode::{Transcoder, TranscoderConfig};
//!
//! let transcoder = Transcoder::with_config(TranscoderConfig::default().timeout_secs(30));
//! match transcoder.transcode(Path::new("impact.wav"), Path::new("impact.mp3")) {
//!     Ok(done) => println!("wrote {}", done.mp3_path.display()),
//!     Err(e) if e.is_unavailable() => println!("keeping impact.wav"),
//!     Err(e) => eprintln!("ffmpeg failed: {e}"),
//! }
//! ```

pub mod error;
pub mod ffmpeg;

pub use error::{TranscodeError, TranscodeResult};
pub use ffmpeg::{Transcoded, Transcoder, TranscoderConfig, DEFAULT_QUALITY, FFMPEG_ENV_VAR};
