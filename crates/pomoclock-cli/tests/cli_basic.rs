//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data directory
//! and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "pomoclock-cli", "--"])
        .args(args)
        .env("POMOCLOCK_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn timer_status_prints_snapshot() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    assert!(stdout.contains("StateSnapshot"));
    assert!(stdout.contains("remaining_secs"));
}

#[test]
fn durations_show_prints_all_phases() {
    let (stdout, _, code) = run_cli(&["durations", "show"]);
    assert_eq!(code, 0, "durations show failed");
    assert!(stdout.contains("focus"));
    assert!(stdout.contains("short"));
    assert!(stdout.contains("long"));
}

#[test]
fn durations_set_accepts_valid_phase() {
    let (stdout, _, code) = run_cli(&["durations", "set", "focus", "25"]);
    assert_eq!(code, 0, "durations set failed");
    assert!(stdout.contains("ok"));
}

#[test]
fn durations_set_rejects_unknown_phase() {
    let (_, stderr, code) = run_cli(&["durations", "set", "lunch", "25"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("lunch"));
}

#[test]
fn durations_reset_succeeds() {
    let (_, _, code) = run_cli(&["durations", "reset"]);
    assert_eq!(code, 0, "durations reset failed");
}
