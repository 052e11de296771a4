//! Voicepack speech synthesis
//!
//! This module provides:
//! - **Phrases**: the fixed catalog of stop/notification lines
//! - **OpenAI**: WAV rendering through the hosted speech endpoint
//! - **Local**: offline rendering through the platform synthesizer

pub mod local;

mod error;
mod openai;
mod phrases;

#[cfg(test)]
mod phrases_tests;

pub use error::TtsError;
pub use openai::{API_KEY_VAR, OpenAiTts};
pub use phrases::{
    NOTIFICATION_PHRASES, STOP_PHRASES, VoicepackEntry, engineer_phrase, notification_file_name,
    stop_file_name, voicepack_entries,
};
