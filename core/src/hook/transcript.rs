//! Transcript mirroring
//!
//! Agent transcripts are newline-delimited JSON. The mirror regenerates
//! `chat.json` as a single JSON array from scratch on every run, skipping
//! blank and malformed lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::error::RecorderError;
use super::recorder::write_json_array;

/// Rewrite `mirror_path` as a JSON array of the parseable lines of
/// `transcript_path`, preserving line order. Returns the entry count.
pub fn mirror(transcript_path: &Path, mirror_path: &Path) -> Result<usize, RecorderError> {
    let read_err = |source| RecorderError::ReadTranscript {
        path: transcript_path.to_path_buf(),
        source,
    };

    let file = File::open(transcript_path).map_err(read_err)?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line.map_err(read_err)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => entries.push(value),
            Err(_) => skipped += 1,
        }
    }

    write_json_array(mirror_path, &entries)?;
    debug!(
        entries = entries.len(),
        skipped,
        path = ?mirror_path,
        "transcript mirrored"
    );
    Ok(entries.len())
}
