//! Integration tests for the CLI binary.
//!
//! Only commands that never touch the network are exercised: `reason` and
//! `remove` work purely against the roster file.
//!
//! This test is registered as a [[test]] in the player-roster-cli crate
//! so that CARGO_BIN_EXE_roster is available.

use std::path::Path;
use std::process::{Command, Output};

const STEVE: &str = "abc123abc123abc123abc123abc123ab";

/// Get a Command pointing to the `roster` binary.
fn roster_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_roster"))
}

fn run_with_store(store: &Path, args: &[&str]) -> Output {
    roster_binary()
        .arg("--store")
        .arg(store)
        .args(args)
        .output()
        .expect("failed to execute roster")
}

#[test]
fn cli_responds_to_help() {
    let output = roster_binary()
        .arg("--help")
        .output()
        .expect("failed to execute roster --help");

    assert!(
        output.status.success(),
        "roster --help should exit with success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["add", "remove", "reason", "bulk", "list"] {
        assert!(
            stdout.contains(command),
            "help should mention `{command}`, got: {stdout}"
        );
    }
}

#[test]
fn cli_without_command_prints_usage() {
    let output = roster_binary().output().expect("failed to execute roster");

    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "expected usage help, got: {text}");
}

#[test]
fn cli_responds_to_version() {
    let output = roster_binary()
        .arg("--version")
        .output()
        .expect("failed to execute roster --version");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("roster"),
        "roster --version should contain the binary name, got: {stdout}"
    );
}

#[test]
fn cli_exits_with_error_on_unknown_command() {
    let output = roster_binary()
        .arg("frobnicate")
        .output()
        .expect("failed to execute roster");

    assert!(!output.status.success());
}

#[test]
fn cli_reason_updates_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("player_list.txt");
    std::fs::write(&store, format!("{STEVE}|Steve,Steve2|griefer")).unwrap();

    let output = run_with_store(&store, &["reason", "Steve2", "banned"]);
    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(&store).unwrap(),
        format!("{STEVE}|Steve,Steve2|banned")
    );
}

#[test]
fn cli_reason_verbose_shows_player() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("player_list.txt");
    std::fs::write(&store, format!("{STEVE}|Steve,Steve2|griefer")).unwrap();

    let output = run_with_store(&store, &["--verbose", "reason", STEVE, "banned"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("UUID:  {STEVE}")), "stdout: {stdout}");
    assert!(stdout.contains("Names: Steve, Steve2"), "stdout: {stdout}");
}

#[test]
fn cli_reason_not_found_leaves_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("player_list.txt");
    std::fs::write(&store, format!("{STEVE}|Steve|griefer")).unwrap();

    let output = run_with_store(&store, &["reason", "NoSuchName", "x"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("NoSuchName is not in the list."));

    let output = run_with_store(
        &store,
        &["reason", "ffffffffffffffffffffffffffffffff", "x"],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("UUID ffffffffffffffffffffffffffffffff is not in the list."));

    assert_eq!(
        std::fs::read_to_string(&store).unwrap(),
        format!("{STEVE}|Steve|griefer")
    );
}

#[test]
fn cli_remove_by_current_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("player_list.txt");
    std::fs::write(&store, format!("{STEVE}|Steve,Steve2|")).unwrap();

    let output = run_with_store(&store, &["remove", "Steve"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Could not find Steve"));

    let output = run_with_store(&store, &["remove", "Steve2"]);
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&store).unwrap(), "");
}

#[test]
fn cli_malformed_store_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("player_list.txt");
    std::fs::write(&store, "not a roster line").unwrap();

    let output = run_with_store(&store, &["remove", "Steve"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("line 1"), "stderr: {stderr}");
}
