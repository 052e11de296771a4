//! Sound playback
//!
//! In-process playback through rodio is the primary path. When the output
//! stream cannot be opened (headless machines, missing audio server) the
//! platform's native player commands take over, each bounded by a wall-clock
//! timeout.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, warn};

use crate::command::{WaitOutcome, run_with_timeout};

use super::error::PlaybackError;

/// Plays sound files at a configured volume.
pub struct Player {
    volume: u8,
    command_timeout: Duration,
}

impl Player {
    pub fn new(volume: u8, command_timeout: Duration) -> Self {
        Self {
            volume,
            command_timeout,
        }
    }

    /// Play `path` to completion, falling back to system players when
    /// in-process playback fails.
    pub fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        if !path.exists() {
            return Err(PlaybackError::MissingAsset {
                path: path.to_path_buf(),
            });
        }

        match self.play_in_process(path) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(error = %e, "in-process playback failed, trying system players");
                self.play_with_system(path)
            }
        }
    }

    fn play_in_process(&self, path: &Path) -> Result<(), PlaybackError> {
        let (_stream, stream_handle) = OutputStream::try_default()
            .map_err(|source| PlaybackError::OutputStream { source })?;
        let file = File::open(path).map_err(|source| PlaybackError::OpenAsset {
            path: path.to_path_buf(),
            source,
        })?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        let sink =
            Sink::try_new(&stream_handle).map_err(|source| PlaybackError::Sink { source })?;

        sink.set_volume(self.volume as f32 / 100.0);
        sink.append(source);
        sink.sleep_until_end();
        debug!(path = ?path, "played in-process");
        Ok(())
    }

    fn play_with_system(&self, path: &Path) -> Result<(), PlaybackError> {
        for mut command in system_player_commands(path) {
            let program = command.get_program().to_string_lossy().into_owned();
            command.stdout(Stdio::null()).stderr(Stdio::null());

            match run_with_timeout(&mut command, self.command_timeout) {
                Ok(WaitOutcome::Exited(status)) if status.success() => {
                    debug!(player = %program, path = ?path, "played via system player");
                    return Ok(());
                }
                Ok(WaitOutcome::Exited(status)) => {
                    debug!(player = %program, %status, "system player failed")
                }
                Ok(WaitOutcome::TimedOut) => {
                    warn!(player = %program, "system player timed out")
                }
                Err(e) => debug!(player = %program, error = %e, "system player unavailable"),
            }
        }

        Err(PlaybackError::NoPlayer {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(target_os = "windows")]
fn system_player_commands(path: &Path) -> Vec<Command> {
    let mut command = Command::new("cmd");
    command
        .args(["/c", "start", "/wait", ""])
        .arg(path);
    vec![command]
}

#[cfg(target_os = "macos")]
fn system_player_commands(path: &Path) -> Vec<Command> {
    let mut command = Command::new("afplay");
    command.arg(path);
    vec![command]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn system_player_commands(path: &Path) -> Vec<Command> {
    ["aplay", "paplay", "play"]
        .into_iter()
        .map(|player| {
            let mut command = Command::new(player);
            command.arg(path);
            command
        })
        .collect()
}
