//! OpenAI speech synthesis
//!
//! Renders a phrase to WAV through the `/v1/audio/speech` endpoint. The
//! client is only constructed when an API key is present; callers fall back
//! to the local synthesizer otherwise.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::error::TtsError;

const SPEECH_ENDPOINT: &str = "https://api.openai.com/v1/audio/speech";
const MODEL: &str = "tts-1";
const VOICE: &str = "nova";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

/// Client for the OpenAI speech endpoint.
pub struct OpenAiTts {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiTts {
    /// Build a client from `OPENAI_API_KEY`; `None` when the key is unset
    /// or blank.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_VAR).ok()?;
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return None;
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .ok()?;
        Some(Self {
            client,
            api_key: api_key.to_string(),
        })
    }

    /// Render `text` to a WAV file at `dest`.
    pub async fn synthesize(&self, text: &str, dest: &Path) -> Result<(), TtsError> {
        let body = SpeechRequest {
            model: MODEL,
            input: text,
            voice: VOICE,
            response_format: "wav",
        };

        let response = self
            .client
            .post(SPEECH_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| TtsError::Request { source })?;

        let audio = response
            .bytes()
            .await
            .map_err(|source| TtsError::Request { source })?;

        std::fs::write(dest, &audio).map_err(|source| TtsError::WriteAudio {
            path: dest.to_path_buf(),
            source,
        })?;
        debug!(bytes = audio.len(), path = ?dest, "synthesized via openai");
        Ok(())
    }
}
