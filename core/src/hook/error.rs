//! Error types for event recording and transcript mirroring

use std::path::PathBuf;
use thiserror::Error;

/// Errors while recording a hook event or mirroring a transcript
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("failed to create log directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create lock file {path}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("timed out waiting for log lock {path}")]
    LockBusy { path: PathBuf },

    #[error("failed to serialize log entries")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read transcript {path}")]
    ReadTranscript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
