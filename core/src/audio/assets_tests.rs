//! Tests for sound pool selection
//!
//! Verifies that:
//! - Stop picks always come from the stop pool, never other files
//! - Personalization fires at roughly its configured rate and only when
//!   eligible
//! - Empty pools fail without panicking

use std::collections::HashSet;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use super::{AssetPool, ENGINEER_FILE, PlaybackError};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn sounds_dir_with(files: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for file in files {
        std::fs::write(dir.path().join(file), b"RIFF").unwrap();
    }
    dir
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn file_name(path: &PathBuf) -> String {
    path.file_name().unwrap().to_str().unwrap().to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// Stop Selection
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_stop_pick_always_from_stop_pool() {
    let dir = sounds_dir_with(&[
        "stop_01.wav",
        "stop_02.wav",
        "stop_03.wav",
        "notification_01.wav",
        "readme.txt",
        "stop_in_name.mp3",
    ]);
    let pool = AssetPool::new(dir.path());
    let mut rng = rng();

    let stop_names: HashSet<&str> =
        ["stop_01.wav", "stop_02.wav", "stop_03.wav"].into_iter().collect();

    for _ in 0..100 {
        let picked = pool.pick_stop(&mut rng).unwrap();
        assert!(
            stop_names.contains(file_name(&picked).as_str()),
            "unexpected pick: {picked:?}"
        );
    }
}

#[test]
fn test_stop_pick_eventually_covers_the_pool() {
    let dir = sounds_dir_with(&["stop_01.wav", "stop_02.wav", "stop_03.wav"]);
    let pool = AssetPool::new(dir.path());
    let mut rng = rng();

    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(file_name(&pool.pick_stop(&mut rng).unwrap()));
    }

    assert_eq!(seen.len(), 3, "uniform choice should hit every file");
}

#[test]
fn test_stop_single_file_pool() {
    let dir = sounds_dir_with(&["stop_01.wav"]);
    let pool = AssetPool::new(dir.path());

    let picked = pool.pick_stop(&mut rng()).unwrap();
    assert_eq!(file_name(&picked), "stop_01.wav");
}

#[test]
fn test_stop_empty_pool_fails_without_panic() {
    let dir = sounds_dir_with(&["notification_01.wav"]);
    let pool = AssetPool::new(dir.path());

    let result = pool.pick_stop(&mut rng());
    assert!(matches!(result, Err(PlaybackError::EmptyPool { .. })));
}

#[test]
fn test_missing_sounds_dir_fails_without_panic() {
    let pool = AssetPool::new("/nonexistent/sounds");

    let result = pool.pick_stop(&mut rng());
    assert!(matches!(result, Err(PlaybackError::EmptyPool { .. })));
}

// ═══════════════════════════════════════════════════════════════════════════
// Notification Selection
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_engineer_file_excluded_from_general_pool() {
    let dir = sounds_dir_with(&["notification_01.wav", "notification_02.wav", ENGINEER_FILE]);
    let pool = AssetPool::new(dir.path());
    let mut rng = rng();

    // No engineer name set: the personalized file must never be picked.
    for _ in 0..200 {
        let picked = pool.pick_notification(&mut rng, None).unwrap();
        assert_ne!(file_name(&picked), ENGINEER_FILE);
    }
}

#[test]
fn test_personalization_rate_converges() {
    let dir = sounds_dir_with(&["notification_01.wav", "notification_02.wav", ENGINEER_FILE]);
    let pool = AssetPool::new(dir.path());
    let mut rng = rng();

    let trials = 2000;
    let mut personalized = 0usize;
    for _ in 0..trials {
        let picked = pool.pick_notification(&mut rng, Some("Dana")).unwrap();
        if file_name(&picked) == ENGINEER_FILE {
            personalized += 1;
        }
    }

    let rate = personalized as f64 / trials as f64;
    assert!(
        (0.25..0.35).contains(&rate),
        "personalization rate {rate} outside expected band"
    );
}

#[test]
fn test_personalization_requires_engineer_file() {
    let dir = sounds_dir_with(&["notification_01.wav", "notification_02.wav"]);
    let pool = AssetPool::new(dir.path());
    let mut rng = rng();

    for _ in 0..200 {
        let picked = pool.pick_notification(&mut rng, Some("Dana")).unwrap();
        assert_ne!(file_name(&picked), ENGINEER_FILE);
    }
}

#[test]
fn test_notification_empty_pool_fails_without_panic() {
    let dir = sounds_dir_with(&["stop_01.wav"]);
    let pool = AssetPool::new(dir.path());

    let result = pool.pick_notification(&mut rng(), None);
    assert!(matches!(result, Err(PlaybackError::EmptyPool { .. })));
}

#[test]
fn test_only_engineer_file_with_no_name_fails() {
    // The personalized file alone cannot serve the general pool.
    let dir = sounds_dir_with(&[ENGINEER_FILE]);
    let pool = AssetPool::new(dir.path());

    let result = pool.pick_notification(&mut rng(), None);
    assert!(matches!(result, Err(PlaybackError::EmptyPool { .. })));
}

// ═══════════════════════════════════════════════════════════════════════════
// Explicit File Names
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_resolve_file_defaults_wav_extension() {
    let pool = AssetPool::new("/sounds");

    assert_eq!(pool.resolve_file("chime"), PathBuf::from("/sounds/chime.wav"));
}

#[test]
fn test_resolve_file_keeps_existing_extension() {
    let pool = AssetPool::new("/sounds");

    assert_eq!(
        pool.resolve_file("chime.wav"),
        PathBuf::from("/sounds/chime.wav")
    );
    assert_eq!(
        pool.resolve_file("alert.mp3"),
        PathBuf::from("/sounds/alert.mp3")
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Determinism
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_same_seed_same_picks() {
    let dir = sounds_dir_with(&["stop_01.wav", "stop_02.wav", "stop_03.wav", "stop_04.wav"]);
    let pool = AssetPool::new(dir.path());

    let picks = |seed: u64| -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| file_name(&pool.pick_stop(&mut rng).unwrap()))
            .collect()
    };

    assert_eq!(picks(7), picks(7));
}
