//! Sound pool selection
//!
//! The pool is a flat directory of WAV files: `stop_*.wav` for completion
//! sounds, `notification_*.wav` for attention sounds, and the reserved
//! `notification_engineer.wav` spoken with the engineer's name. Selection
//! takes the RNG by parameter so tests can drive it with a seeded generator.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::error::PlaybackError;

/// File name prefix of completion sounds.
pub const STOP_PREFIX: &str = "stop_";
/// File name prefix of notification sounds.
pub const NOTIFICATION_PREFIX: &str = "notification_";
/// Reserved personalized notification sound.
pub const ENGINEER_FILE: &str = "notification_engineer.wav";

/// Chance of picking the personalized sound when one is available.
const PERSONALIZATION_CHANCE: f32 = 0.3;

/// Read-only view of the sound directory.
pub struct AssetPool {
    sounds_dir: PathBuf,
}

impl AssetPool {
    pub fn new(sounds_dir: impl Into<PathBuf>) -> Self {
        Self {
            sounds_dir: sounds_dir.into(),
        }
    }

    pub fn sounds_dir(&self) -> &Path {
        &self.sounds_dir
    }

    /// Uniform random completion sound.
    pub fn pick_stop(&self, rng: &mut impl Rng) -> Result<PathBuf, PlaybackError> {
        let pool = self.matching(STOP_PREFIX);
        pool.choose(rng).cloned().ok_or(PlaybackError::EmptyPool {
            prefix: STOP_PREFIX,
            dir: self.sounds_dir.clone(),
        })
    }

    /// Notification sound, personalized roughly 30% of the time.
    ///
    /// The personalized file is only eligible when an engineer name is set
    /// and the file exists; it never appears in the general pool.
    pub fn pick_notification(
        &self,
        rng: &mut impl Rng,
        engineer_name: Option<&str>,
    ) -> Result<PathBuf, PlaybackError> {
        if engineer_name.is_some() && rng.gen_range(0.0..1.0_f32) < PERSONALIZATION_CHANCE {
            let personalized = self.sounds_dir.join(ENGINEER_FILE);
            if personalized.exists() {
                debug!(name = engineer_name, "picked personalized notification");
                return Ok(personalized);
            }
        }

        let pool: Vec<PathBuf> = self
            .matching(NOTIFICATION_PREFIX)
            .into_iter()
            .filter(|p| p.file_name() != Some(OsStr::new(ENGINEER_FILE)))
            .collect();
        pool.choose(rng).cloned().ok_or(PlaybackError::EmptyPool {
            prefix: NOTIFICATION_PREFIX,
            dir: self.sounds_dir.clone(),
        })
    }

    /// Resolve an explicit file name against the pool, defaulting the
    /// extension to `.wav` when none is given.
    pub fn resolve_file(&self, name: &str) -> PathBuf {
        if Path::new(name).extension().is_some() {
            self.sounds_dir.join(name)
        } else {
            self.sounds_dir.join(format!("{name}.wav"))
        }
    }

    /// WAV files starting with `prefix`, sorted by name for deterministic
    /// selection under a seeded RNG.
    fn matching(&self, prefix: &str) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(&self.sounds_dir) else {
            return Vec::new();
        };

        let mut pool: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension() == Some(OsStr::new("wav"))
                    && path
                        .file_name()
                        .and_then(OsStr::to_str)
                        .is_some_and(|name| name.starts_with(prefix))
            })
            .collect();
        pool.sort();
        pool
    }
}
