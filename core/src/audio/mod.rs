//! Sound selection and playback
//!
//! This module provides:
//! - **AssetPool**: random selection from the WAV pool, with occasional
//!   personalization for notifications
//! - **Player**: rodio playback with a system-player fallback chain

mod assets;
mod error;
mod player;

#[cfg(test)]
mod assets_tests;

pub use assets::{AssetPool, ENGINEER_FILE, NOTIFICATION_PREFIX, STOP_PREFIX};
pub use error::PlaybackError;
pub use player::Player;
