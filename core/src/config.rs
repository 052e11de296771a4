//! Application configuration
//!
//! Loaded from `<config_dir>/chirp/config.toml` via confy. Every field has a
//! default so a missing or partial file never blocks a hook invocation.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable that overrides `engineer_name` from the config file.
pub const ENGINEER_NAME_VAR: &str = "ENGINEER_NAME";

fn default_volume() -> u8 {
    80
}

fn default_playback_timeout_secs() -> u64 {
    10
}

fn default_notify_timeout_secs() -> u64 {
    5
}

/// Settings shared by the stop hook, the player, and the voicepack generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the sound pool (default: `<data_dir>/chirp/sounds`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sounds_dir: Option<PathBuf>,

    /// Name spoken by the personalized notification sound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineer_name: Option<String>,

    /// Playback volume (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,

    /// Wall-clock bound for each external player command, in seconds
    #[serde(default = "default_playback_timeout_secs")]
    pub playback_timeout_secs: u64,

    /// How long the stop hook waits for the notifier child, in seconds
    #[serde(default = "default_notify_timeout_secs")]
    pub notify_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sounds_dir: None,
            engineer_name: None,
            volume: default_volume(),
            playback_timeout_secs: default_playback_timeout_secs(),
            notify_timeout_secs: default_notify_timeout_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load("chirp", "config").unwrap_or_else(|e| {
            warn!(error = %e, "config unreadable, using defaults");
            Self::default()
        })
    }

    /// Sound pool directory, honoring the config override.
    pub fn sounds_dir(&self) -> PathBuf {
        self.sounds_dir.clone().unwrap_or_else(default_sounds_dir)
    }

    /// Engineer name with the environment taking precedence over the file.
    pub fn engineer_name(&self) -> Option<String> {
        let env_value = std::env::var(ENGINEER_NAME_VAR).ok();
        resolve_engineer_name(env_value.as_deref(), self.engineer_name.as_deref())
    }

    pub fn playback_timeout(&self) -> Duration {
        Duration::from_secs(self.playback_timeout_secs)
    }

    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }
}

/// Pick the engineer name from environment over config; whitespace-only
/// values count as unset.
pub fn resolve_engineer_name(
    env_value: Option<&str>,
    config_value: Option<&str>,
) -> Option<String> {
    let cleaned = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    };
    cleaned(env_value).or_else(|| cleaned(config_value))
}

pub fn default_sounds_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("chirp").join("sounds"))
        .unwrap_or_else(|| PathBuf::from("sounds"))
}
