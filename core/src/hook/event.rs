//! Hook event payload
//!
//! The agent sends one JSON object on stdin per hook invocation. Only a few
//! fields matter to us; everything else is carried through untouched so the
//! recorded log mirrors exactly what the agent sent.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stop-hook invocation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Set by the agent when the stop hook re-enters itself. Recorded
    /// verbatim, never branched on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_hook_active: Option<bool>,

    /// Location of the session transcript (newline-delimited JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_path: Option<PathBuf>,

    /// All remaining fields, preserved as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HookEvent {
    /// Parse a single event from a JSON stream (typically stdin).
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
