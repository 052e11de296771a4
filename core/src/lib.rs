pub mod audio;
pub mod command;
pub mod config;
pub mod hook;
pub mod tts;

#[cfg(test)]
mod command_tests;

// Re-exports for convenience
pub use audio::{AssetPool, PlaybackError, Player};
pub use command::{WaitOutcome, run_with_timeout, sibling_binary};
pub use config::AppConfig;
pub use hook::{EventRecorder, HookEvent, RecorderError};
pub use tts::{OpenAiTts, TtsError};
