//! Error types for sound selection and playback

use std::path::PathBuf;
use thiserror::Error;

/// Errors while picking or playing a sound
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no {prefix}*.wav sounds in {dir}")]
    EmptyPool { prefix: &'static str, dir: PathBuf },

    #[error("sound file {path} does not exist")]
    MissingAsset { path: PathBuf },

    #[error("failed to open audio output stream")]
    OutputStream {
        #[source]
        source: rodio::StreamError,
    },

    #[error("failed to open sound file {path}")]
    OpenAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sound file {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("failed to create playback sink")]
    Sink {
        #[source]
        source: rodio::PlayError,
    },

    #[error("no system audio player could play {path}")]
    NoPlayer { path: PathBuf },
}
