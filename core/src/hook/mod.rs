//! Agent stop-hook event recording
//!
//! This module provides:
//! - **Event**: the JSON payload an agent sends when a session stops
//! - **Recorder**: locked, atomic append to the `logs/stop.json` array
//! - **Transcript mirror**: `logs/chat.json` regenerated from the session
//!   transcript on request

mod error;
mod event;
mod recorder;
mod transcript;


pub use error::RecorderError;
pub use event::HookEvent;
pub use recorder::{CHAT_MIRROR_FILE, EVENT_LOG_FILE, EventRecorder, LOG_DIR_NAME};
