//! Tests for bounded subprocess execution

use std::process::Command;
use std::time::{Duration, Instant};

use crate::command::{WaitOutcome, run_with_timeout, sibling_binary};

#[cfg(unix)]
#[test]
fn test_prompt_child_reports_exit_status() {
    let outcome = run_with_timeout(&mut Command::new("true"), Duration::from_secs(5)).unwrap();

    match outcome {
        WaitOutcome::Exited(status) => assert!(status.success()),
        WaitOutcome::TimedOut => panic!("child should have exited"),
    }
}

#[cfg(unix)]
#[test]
fn test_failing_child_reports_nonzero_status() {
    let outcome = run_with_timeout(&mut Command::new("false"), Duration::from_secs(5)).unwrap();

    match outcome {
        WaitOutcome::Exited(status) => assert!(!status.success()),
        WaitOutcome::TimedOut => panic!("child should have exited"),
    }
}

#[cfg(unix)]
#[test]
fn test_overrunning_child_is_killed() {
    let start = Instant::now();
    let mut command = Command::new("sleep");
    command.arg("10");

    let outcome = run_with_timeout(&mut command, Duration::from_millis(100)).unwrap();

    assert!(matches!(outcome, WaitOutcome::TimedOut));
    assert!(
        start.elapsed() < Duration::from_secs(5),
        "child must be killed at the deadline, not waited to completion"
    );
}

#[test]
fn test_missing_program_is_a_spawn_error() {
    let result = run_with_timeout(
        &mut Command::new("chirp-no-such-program-here"),
        Duration::from_secs(1),
    );

    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
fn test_sibling_binary_keeps_bare_name() {
    let path = sibling_binary("chirp-play");
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("chirp-play")
    );
}

#[cfg(windows)]
#[test]
fn test_sibling_binary_appends_exe() {
    let path = sibling_binary("chirp-play");
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("chirp-play.exe")
    );
}
