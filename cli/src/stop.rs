//! Agent stop hook: records the event from stdin, mirrors the transcript on
//! request, and fires the completion sound.

use std::io;
use std::process::{Command, Stdio};

use clap::Parser;
use tracing::{debug, warn};

use chirp_core::command::{WaitOutcome, run_with_timeout, sibling_binary};
use chirp_core::config::AppConfig;
use chirp_core::hook::{EventRecorder, HookEvent, LOG_DIR_NAME, RecorderError};

#[derive(Parser)]
#[command(version, about = "Records agent stop events and plays a completion sound")]
struct Cli {
    /// Also mirror the session transcript to logs/chat.json
    #[arg(long)]
    chat: bool,
}

fn main() {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();
    let _guard = chirp_cli::logging::init();

    // A hook must never fail its host: every error ends at this boundary.
    if let Err(e) = run(&cli) {
        warn!(error = %e, "stop hook failed");
    }
}

fn run(cli: &Cli) -> Result<(), RecorderError> {
    let event = match HookEvent::from_reader(io::stdin().lock()) {
        Ok(event) => event,
        Err(e) => {
            debug!(error = %e, "unparseable hook input, nothing recorded");
            return Ok(());
        }
    };

    let recorder = EventRecorder::new(LOG_DIR_NAME);
    recorder.record(&event)?;

    if cli.chat {
        match &event.transcript_path {
            Some(path) => {
                if let Err(e) = recorder.mirror_transcript(path) {
                    warn!(error = %e, "transcript mirror failed");
                }
            }
            None => debug!("event carries no transcript_path, skipping mirror"),
        }
    }

    notify();
    Ok(())
}

/// Fire the notifier and give it a bounded window to finish.
fn notify() {
    let config = AppConfig::load();
    let mut command = Command::new(sibling_binary("chirp-play"));
    command
        .arg("stop")
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match run_with_timeout(&mut command, config.notify_timeout()) {
        Ok(WaitOutcome::Exited(status)) if status.success() => debug!("notifier finished"),
        Ok(WaitOutcome::Exited(status)) => debug!(%status, "notifier exited nonzero"),
        Ok(WaitOutcome::TimedOut) => warn!("notifier timed out"),
        Err(e) => debug!(error = %e, "notifier could not start"),
    }
}
