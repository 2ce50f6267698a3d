//! ffmpeg subprocess transcoder.
//!
//! Converts a WAV file to MP3 by running
//! `ffmpeg -i <wav> -q:a <quality> <mp3> -y` and deletes the WAV once the
//! MP3 exists. A missing ffmpeg is reported separately from an ffmpeg that
//! ran and failed, so callers can fall back quietly in the first case and
//! warn in the second.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crate::error::{TranscodeError, TranscodeResult};

/// Environment variable overriding the ffmpeg executable.
pub const FFMPEG_ENV_VAR: &str = "SFXGEN_FFMPEG_BIN";

/// Default encoder timeout (1 minute).
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default VBR quality passed as `-q:a` (0 = best, 9 = smallest).
pub const DEFAULT_QUALITY: u8 = 9;

/// Lines of encoder stderr kept in error reports.
const STDERR_TAIL_LINES: usize = 10;

/// How long to wait for the rest of stderr once the encoder has exited.
const STDERR_DRAIN_GRACE: Duration = Duration::from_secs(2);

/// Configuration for the transcoder.
#[derive(Debug, Clone)]
pub struct TranscoderConfig {
    /// Path to the ffmpeg executable.
    pub ffmpeg_path: Option<PathBuf>,
    /// VBR quality for `-q:a`.
    pub quality: u8,
    /// Timeout for a single conversion.
    pub timeout: Duration,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            quality: DEFAULT_QUALITY,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TranscoderConfig {
    /// Sets the ffmpeg executable path.
    pub fn ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg_path = Some(path.into());
        self
    }

    /// Sets the VBR quality.
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality.min(9);
        self
    }

    /// Sets the timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

/// WAV to MP3 transcoder backed by ffmpeg.
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    config: TranscoderConfig,
}

impl Transcoder {
    /// Creates a new transcoder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new transcoder with the given configuration.
    pub fn with_config(config: TranscoderConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TranscoderConfig {
        &self.config
    }

    /// Finds the ffmpeg executable.
    ///
    /// Lookup order: configured path, `SFXGEN_FFMPEG_BIN`, then `PATH`.
    pub fn find_ffmpeg(&self) -> TranscodeResult<PathBuf> {
        if let Some(ref path) = self.config.ffmpeg_path {
            if path.exists() {
                return Ok(path.clone());
            }
            // An explicit path that does not exist means "no encoder".
            return Err(TranscodeError::EncoderNotFound);
        }

        if let Ok(path) = std::env::var(FFMPEG_ENV_VAR) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                let path = PathBuf::from(trimmed);
                if path.exists() {
                    return Ok(path);
                }
                if let Ok(found) = which::which(trimmed) {
                    return Ok(found);
                }
            }
        }

        which::which("ffmpeg").map_err(|_| TranscodeError::EncoderNotFound)
    }

    /// Returns the first line of `ffmpeg -version`.
    pub fn encoder_version(&self) -> TranscodeResult<String> {
        let ffmpeg = self.find_ffmpeg()?;
        let output = Command::new(&ffmpeg)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_error)?;

        if !output.status.success() {
            return Err(TranscodeError::process_failed(
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string())
    }

    /// Converts `wav_path` to `mp3_path`.
    ///
    /// On success the WAV file is removed. On any error the WAV file is left
    /// untouched and a partially written MP3 is deleted.
    pub fn transcode(&self, wav_path: &Path, mp3_path: &Path) -> TranscodeResult<Transcoded> {
        let ffmpeg = self.find_ffmpeg()?;

        // A stale file from an earlier run would mask a silent failure.
        if mp3_path.exists() {
            std::fs::remove_file(mp3_path)?;
        }

        let mut cmd = Command::new(&ffmpeg);
        cmd.arg("-i")
            .arg(wav_path)
            .arg("-q:a")
            .arg(self.config.quality.to_string())
            .arg(mp3_path)
            .arg("-y");

        // ffmpeg reads stdin for interactive commands; never let it block on it.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(spawn_error)?;
        let outcome = wait_with_timeout(child, self.config.timeout).and_then(|(status, stderr)| {
            if !status.success() {
                return Err(TranscodeError::process_failed(
                    status.code().unwrap_or(-1),
                    tail_lines(&stderr, STDERR_TAIL_LINES),
                ));
            }
            if !mp3_path.exists() {
                return Err(TranscodeError::OutputMissing {
                    path: mp3_path.to_path_buf(),
                });
            }
            Ok(())
        });

        if let Err(e) = outcome {
            discard_partial_output(mp3_path);
            return Err(e);
        }

        let wav_cleanup_error = match std::fs::remove_file(wav_path) {
            Ok(()) => None,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => Some(e),
        };

        Ok(Transcoded {
            mp3_path: mp3_path.to_path_buf(),
            wav_cleanup_error,
        })
    }
}

/// A finished conversion.
#[derive(Debug)]
pub struct Transcoded {
    /// The MP3 file that was written.
    pub mp3_path: PathBuf,
    /// Set when the MP3 is fine but the intermediate WAV could not be removed.
    pub wav_cleanup_error: Option<std::io::Error>,
}

fn spawn_error(e: std::io::Error) -> TranscodeError {
    if e.kind() == std::io::ErrorKind::NotFound {
        TranscodeError::EncoderNotFound
    } else {
        TranscodeError::SpawnFailed(e)
    }
}

fn discard_partial_output(mp3_path: &Path) {
    let _ = std::fs::remove_file(mp3_path);
}

/// Drains stderr on a separate thread so a chatty child cannot fill the
/// pipe and stall while we poll for exit.
///
/// The thread only finishes at EOF, which a forked grandchild can hold off
/// indefinitely, so results come back over a channel and are never joined.
fn spawn_stderr_reader(child: &mut Child) -> Option<Receiver<String>> {
    child.stderr.take().map(|mut err| {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = err.read_to_end(&mut buf);
            let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
        });
        rx
    })
}

fn wait_with_timeout(mut child: Child, timeout: Duration) -> TranscodeResult<(ExitStatus, String)> {
    let start = Instant::now();
    let reader = spawn_stderr_reader(&mut child);

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(TranscodeError::Timeout {
                        timeout_ms: timeout.as_millis() as u64,
                    });
                }
                std::thread::sleep(Duration::from_millis(20));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(TranscodeError::SpawnFailed(e));
            }
        }
    };

    let stderr = reader
        .and_then(|rx| rx.recv_timeout(STDERR_DRAIN_GRACE).ok())
        .unwrap_or_default();

    Ok((status, stderr))
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
