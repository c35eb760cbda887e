//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers that pin the platform and working directory
//! - Output helpers for common checks

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Working directory every pinned command resolves against.
pub const TEST_CWD: &str = "/work/project";

/// Environment variables that would leak host settings into a test.
const PATHKIT_VARS: [&str; 5] = [
    "PATHKIT_PLATFORM",
    "PATHKIT_CWD",
    "PATHKIT_CONFIG",
    "PATHKIT_LOG_MODE",
    "PATHKIT_OUTPUT_FORMAT",
];

/// Test environment with an isolated home directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as `HOME`, so no user config is picked up
/// - Helper methods for writing configuration files
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with a clean environment and no pinned flags.
    ///
    /// Use this when a test needs to control `--platform` and `--cwd`
    /// itself, or exercise environment variables.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathkit").expect("Failed to find pathkit binary");
        for var in PATHKIT_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd.env("USERPROFILE", &self.temp_path);
        cmd
    }

    /// Get a command builder pinned to POSIX rules and [`TEST_CWD`].
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--platform").arg("posix").arg("--cwd").arg(TEST_CWD);
        cmd
    }

    /// Get a command builder pinned to Windows rules and `C:\work`.
    pub fn windows_command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--platform").arg("windows").arg("--cwd").arg("C:\\work");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a configuration file under the temp directory and return its path.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Write `~/.pathkit/config.yaml` inside the isolated home directory.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.temp_path.join(".pathkit");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run a pinned command with `args` and return its trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathkit");

        assert!(
            output.status.success(),
            "pathkit {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
