//! Bounded subprocess execution
//!
//! Hook invocations must finish quickly, so every external command (system
//! audio players, local speech synthesis, the notifier child) runs under a
//! wall-clock deadline and is killed when it overruns.

use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// How a bounded child process ended.
#[derive(Debug)]
pub enum WaitOutcome {
    Exited(ExitStatus),
    TimedOut,
}

/// Spawn `command` and wait at most `timeout` for it to exit.
///
/// An overrunning child is killed and reaped before returning
/// [`WaitOutcome::TimedOut`]. Spawn failures (missing program, permissions)
/// surface as the `Err` variant.
pub fn run_with_timeout(command: &mut Command, timeout: Duration) -> std::io::Result<WaitOutcome> {
    let mut child = command.spawn()?;
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(WaitOutcome::Exited(status));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(WaitOutcome::TimedOut);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}

/// Path of a companion binary installed next to the current executable,
/// falling back to a bare name for PATH lookup.
pub fn sibling_binary(name: &str) -> PathBuf {
    let file_name = if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    };

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| PathBuf::from(file_name))
}
