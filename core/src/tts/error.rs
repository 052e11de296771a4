//! Error types for speech synthesis

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors while synthesizing a voicepack file
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("speech request failed")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write audio file {path}")]
    WriteAudio {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch speech synthesizer {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("speech synthesizer {program} exited with {status}")]
    SynthesizerFailed { program: String, status: ExitStatus },

    #[error("speech synthesizer {program} timed out")]
    SynthesizerTimeout { program: String },

    #[error("speech synthesizer {program} produced no output at {path}")]
    NoOutput { program: String, path: PathBuf },
}
