//! Tests for the voicepack phrase catalog

use crate::audio::ENGINEER_FILE;

use super::{
    NOTIFICATION_PHRASES, STOP_PHRASES, engineer_phrase, notification_file_name, stop_file_name,
    voicepack_entries,
};

#[test]
fn test_catalog_sizes() {
    assert_eq!(STOP_PHRASES.len(), 10);
    assert_eq!(NOTIFICATION_PHRASES.len(), 5);
}

#[test]
fn test_file_names_are_zero_padded() {
    assert_eq!(stop_file_name(1), "stop_01.wav");
    assert_eq!(stop_file_name(10), "stop_10.wav");
    assert_eq!(notification_file_name(5), "notification_05.wav");
}

#[test]
fn test_entries_without_engineer() {
    let entries = voicepack_entries(None);

    assert_eq!(entries.len(), 15);
    assert_eq!(entries[0].file_name, "stop_01.wav");
    assert_eq!(entries[0].text, "Work complete!");
    assert_eq!(entries[9].file_name, "stop_10.wav");
    assert_eq!(entries[10].file_name, "notification_01.wav");
    assert_eq!(entries[10].text, "Your agent needs your input");
    assert_eq!(entries[14].file_name, "notification_05.wav");
}

#[test]
fn test_entries_with_engineer() {
    let entries = voicepack_entries(Some("Dana"));

    assert_eq!(entries.len(), 16);
    let last = entries.last().unwrap();
    assert_eq!(last.file_name, ENGINEER_FILE);
    assert_eq!(last.text, "Dana, your agent needs your input");
}

#[test]
fn test_engineer_phrase_format() {
    assert_eq!(
        engineer_phrase("Robin"),
        "Robin, your agent needs your input"
    );
}

#[test]
fn test_every_entry_is_a_wav() {
    for entry in voicepack_entries(Some("Dana")) {
        assert!(
            entry.file_name.ends_with(".wav"),
            "not a wav: {}",
            entry.file_name
        );
        assert!(!entry.text.is_empty());
    }
}
