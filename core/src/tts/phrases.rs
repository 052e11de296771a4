//! Voicepack phrase catalog
//!
//! Fixed phrase lists and the file names they are rendered to. The notifier
//! only ever globs by prefix, so the numbering here is a convention, not a
//! contract.

/// Spoken when an agent finishes its work.
pub const STOP_PHRASES: [&str; 10] = [
    "Work complete!",
    "All done!",
    "Task finished!",
    "Job complete!",
    "Ready for next task!",
    "Mission accomplished!",
    "Success!",
    "Finished!",
    "Complete!",
    "Done and dusted!",
];

/// Spoken when an agent is waiting on the engineer.
pub const NOTIFICATION_PHRASES: [&str; 5] = [
    "Your agent needs your input",
    "Waiting for your response",
    "Please provide input",
    "Agent waiting",
    "Your attention needed",
];

/// One file the voicepack generator produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicepackEntry {
    pub file_name: String,
    pub text: String,
}

/// Output file name for the 1-based `index`th stop phrase.
pub fn stop_file_name(index: usize) -> String {
    format!("stop_{index:02}.wav")
}

/// Output file name for the 1-based `index`th notification phrase.
pub fn notification_file_name(index: usize) -> String {
    format!("notification_{index:02}.wav")
}

/// Personalized notification text for an engineer.
pub fn engineer_phrase(name: &str) -> String {
    format!("{name}, your agent needs your input")
}

/// The full set of files a generation run produces, including the
/// personalized entry when an engineer name is known.
pub fn voicepack_entries(engineer_name: Option<&str>) -> Vec<VoicepackEntry> {
    let mut entries: Vec<VoicepackEntry> = STOP_PHRASES
        .iter()
        .enumerate()
        .map(|(i, text)| VoicepackEntry {
            file_name: stop_file_name(i + 1),
            text: (*text).to_string(),
        })
        .collect();

    entries.extend(
        NOTIFICATION_PHRASES
            .iter()
            .enumerate()
            .map(|(i, text)| VoicepackEntry {
                file_name: notification_file_name(i + 1),
                text: (*text).to_string(),
            }),
    );

    if let Some(name) = engineer_name {
        entries.push(VoicepackEntry {
            file_name: crate::audio::ENGINEER_FILE.to_string(),
            text: engineer_phrase(name),
        });
    }

    entries
}
