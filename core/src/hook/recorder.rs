//! Event log persistence
//!
//! `logs/stop.json` is a pretty-printed JSON array rewritten whole on every
//! hook invocation. The read-modify-write cycle runs under an advisory lock
//! file so concurrent invocations cannot drop each other's events, and the
//! rewrite goes through a temp file plus rename so a crash mid-write leaves
//! the previous log intact.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::RecorderError;
use super::event::HookEvent;
use super::transcript;

/// Log directory relative to the hook's working directory.
pub const LOG_DIR_NAME: &str = "logs";
/// Event log file name inside the log directory.
pub const EVENT_LOG_FILE: &str = "stop.json";
/// Transcript mirror file name inside the log directory.
pub const CHAT_MIRROR_FILE: &str = "chat.json";

const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(25);
const LOCK_WAIT: Duration = Duration::from_secs(1);
const LOCK_STALE_AFTER: Duration = Duration::from_secs(30);

/// Appends hook events to the JSON array log in a directory.
pub struct EventRecorder {
    log_dir: PathBuf,
}

impl EventRecorder {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(EVENT_LOG_FILE)
    }

    pub fn mirror_path(&self) -> PathBuf {
        self.log_dir.join(CHAT_MIRROR_FILE)
    }

    /// Append one event to the log, creating the directory and file as
    /// needed. An unreadable or corrupt existing log is reset to empty
    /// rather than treated as an error.
    pub fn record(&self, event: &HookEvent) -> Result<(), RecorderError> {
        self.ensure_log_dir()?;

        let log_path = self.log_path();
        let _lock = LogLock::acquire(&log_path)?;

        let mut events = load_entries(&log_path);
        let entry = serde_json::to_value(event)
            .map_err(|source| RecorderError::Serialize { source })?;
        events.push(entry);

        write_json_array(&log_path, &events)?;
        debug!(total = events.len(), path = ?log_path, "event recorded");
        Ok(())
    }

    /// Mirror a newline-delimited JSON transcript to `chat.json`.
    ///
    /// Returns `Ok(None)` without touching the mirror when the transcript
    /// does not exist, otherwise the number of mirrored entries.
    pub fn mirror_transcript(
        &self,
        transcript_path: &Path,
    ) -> Result<Option<usize>, RecorderError> {
        if !transcript_path.exists() {
            debug!(path = ?transcript_path, "transcript not found, mirror left untouched");
            return Ok(None);
        }
        self.ensure_log_dir()?;
        transcript::mirror(transcript_path, &self.mirror_path()).map(Some)
    }

    fn ensure_log_dir(&self) -> Result<(), RecorderError> {
        fs::create_dir_all(&self.log_dir).map_err(|source| RecorderError::CreateDir {
            path: self.log_dir.clone(),
            source,
        })
    }
}

/// Read the existing log; absent or unparseable contents start a fresh array.
fn load_entries(path: &Path) -> Vec<Value> {
    let Ok(data) = fs::read(path) else {
        return Vec::new();
    };
    match serde_json::from_slice(&data) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!(path = ?path, "log is not a JSON array, starting fresh");
            Vec::new()
        }
        Err(e) => {
            warn!(path = ?path, error = %e, "log unreadable, starting fresh");
            Vec::new()
        }
    }
}

/// Pretty-print `entries` to `path` via a temp file in the same directory
/// and an atomic rename.
pub(super) fn write_json_array(path: &Path, entries: &[Value]) -> Result<(), RecorderError> {
    let json = serde_json::to_vec_pretty(entries)
        .map_err(|source| RecorderError::Serialize { source })?;

    let dir = path.parent().unwrap_or(Path::new("."));
    let write_err = |source| RecorderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&json).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Advisory lock on the event log, held for the guard's lifetime.
///
/// `create_new` on the lock file is the mutual exclusion primitive; a lock
/// older than [`LOCK_STALE_AFTER`] is presumed abandoned by a crashed hook
/// and taken over.
struct LogLock {
    path: PathBuf,
}

impl LogLock {
    fn acquire(log_path: &Path) -> Result<Self, RecorderError> {
        let path = lock_path(log_path);
        let deadline = Instant::now() + LOCK_WAIT;

        loop {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(Self { path }),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    if Instant::now() >= deadline {
                        return Err(RecorderError::LockBusy { path });
                    }
                    if lock_is_stale(&path) {
                        warn!(lock = ?path, "removing stale log lock");
                        let _ = fs::remove_file(&path);
                    } else {
                        std::thread::sleep(LOCK_RETRY_INTERVAL);
                    }
                }
                Err(source) => return Err(RecorderError::Lock { path, source }),
            }
        }
    }
}

impl Drop for LogLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn lock_path(log_path: &Path) -> PathBuf {
    let mut name = log_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    log_path.with_file_name(name)
}

fn lock_is_stale(path: &Path) -> bool {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|mtime| mtime.elapsed().ok())
        .is_some_and(|age| age > LOCK_STALE_AFTER)
}
