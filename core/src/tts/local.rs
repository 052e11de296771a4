//! Platform speech synthesis
//!
//! Offline fallback when the OpenAI endpoint is unavailable: each platform
//! ships a synthesizer that can render text straight to a WAV file.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::debug;

use crate::command::{WaitOutcome, run_with_timeout};

use super::error::TtsError;

/// Bound on a single synthesizer invocation.
pub const SYNTH_TIMEOUT: Duration = Duration::from_secs(30);

/// Render `text` to a WAV file at `dest` with the platform synthesizer.
pub fn synthesize(text: &str, dest: &Path, timeout: Duration) -> Result<(), TtsError> {
    let mut command = synth_command(text, dest);
    command.stdout(Stdio::null()).stderr(Stdio::null());
    let program = command.get_program().to_string_lossy().into_owned();

    let outcome = run_with_timeout(&mut command, timeout).map_err(|source| TtsError::Spawn {
        program: program.clone(),
        source,
    })?;

    match outcome {
        WaitOutcome::Exited(status) if status.success() => {
            if !dest.exists() {
                return Err(TtsError::NoOutput {
                    program,
                    path: dest.to_path_buf(),
                });
            }
            debug!(path = ?dest, %program, "synthesized locally");
            Ok(())
        }
        WaitOutcome::Exited(status) => Err(TtsError::SynthesizerFailed { program, status }),
        WaitOutcome::TimedOut => Err(TtsError::SynthesizerTimeout { program }),
    }
}

#[cfg(target_os = "macos")]
fn synth_command(text: &str, dest: &Path) -> Command {
    let mut command = Command::new("say");
    command.arg("-o").arg(dest).arg(text);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn synth_command(text: &str, dest: &Path) -> Command {
    let mut command = Command::new("espeak");
    command.arg("-w").arg(dest).arg(text);
    command
}

#[cfg(target_os = "windows")]
fn synth_command(text: &str, dest: &Path) -> Command {
    // Single-quoted PowerShell strings escape quotes by doubling them
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
         $s.SetOutputToWaveFile('{}'); \
         $s.Speak('{}'); \
         $s.Dispose()",
        dest.display().to_string().replace('\'', "''"),
        text.replace('\'', "''"),
    );
    let mut command = Command::new("powershell");
    command.args(["-NoProfile", "-Command", &script]);
    command
}
