//! Integration tests for the eslintrc CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary without arguments displays usage.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("eslintrc").expect("Failed to find eslintrc binary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("eslintrc").expect("Failed to find eslintrc binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("eslintrc"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag lists the commands.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("eslintrc").expect("Failed to find eslintrc binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Inspect cascading lint configuration"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("completions"));
}

/// Test that an unknown subcommand is rejected.
#[test]
fn test_cli_unknown_command() {
    let mut cmd = Command::cargo_bin("eslintrc").expect("Failed to find eslintrc binary");

    cmd.arg("frobnicate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that completions are generated for bash.
#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("eslintrc").expect("Failed to find eslintrc binary");

    cmd.args(["completions", "bash"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("eslintrc"))
        .stdout(predicate::str::contains("resolve"));
}
