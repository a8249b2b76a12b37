//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - A project tree in a temporary directory
//! - A separate home directory, so personal configs never leak in
//! - Command builders with the working directory pre-configured

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated project and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the project root
    pub project: PathBuf,
    /// Path to the home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project = temp_dir.path().join("project");
        let home = temp_dir.path().join("home");
        std::fs::create_dir_all(&project).expect("Failed to create project directory");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            project,
            home,
        }
    }

    /// Get a bare command builder with only the isolated home directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("eslintrc").expect("Failed to find eslintrc binary");
        cmd.env("HOME", &self.home)
            .env("USERPROFILE", &self.home)
            .env_remove("ESLINTRC_RESOLVE_PLUGINS_RELATIVE_TO")
            .env_remove("ESLINTRC_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--cwd` set to the project root.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--cwd").arg(&self.project);
        cmd
    }

    /// Path inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project.join(relative)
    }

    /// Write a file inside `root`, creating parent directories.
    pub fn write_in(&self, root: &Path, relative: &str, contents: &str) -> PathBuf {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create test directory");
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a file inside the project.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        self.write_in(&self.project, relative, contents)
    }

    /// Run a command and parse its stdout as JSON.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run eslintrc");
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
