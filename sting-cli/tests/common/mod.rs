//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working directory
//! - Command builders isolated from the caller's `STING_*` variables
//! - Helpers for writing and reading the configuration file

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use sting::config::{EnvironmentConfig, DEFAULT_CONFIG_FILENAME, DEFAULT_ENV_PREFIX};
use sting::logging::LOG_MODE_ENV;
use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Every command runs with the temporary directory as its working
/// directory, so the default configuration file lands there.
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

    /// Get a command builder running in the temporary directory.
    ///
    /// Inherited `STING_*` variables are removed so the host environment
    /// cannot leak into the precedence chain.
    pub fn command(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("stingoftheviper").expect("Failed to find stingoftheviper binary");
        cmd.current_dir(&self.temp_path);
        for name in EnvironmentConfig::variable_names(DEFAULT_ENV_PREFIX) {
            cmd.env_remove(name);
        }
        cmd.env_remove(LOG_MODE_ENV);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the default configuration file in the working directory.
    pub fn config_path(&self) -> PathBuf {
        self.temp_path.join(DEFAULT_CONFIG_FILENAME)
    }

    /// Write the default configuration file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config file");
    }

    /// Read the default configuration file.
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }

    /// Run with `args`, assert success, and return stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run stingoftheviper");

        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
