//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with a temporary directory
//! - Command builders that run inside that directory

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated scratch directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A command for the longfs binary, run from the scratch directory.
    ///
    /// The threshold variable is cleared so the default applies unless a
    /// test sets it.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("longfs").expect("Failed to find longfs binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("LONGFS_THRESHOLD");
        cmd.env_remove("LONGFS_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file with the given contents.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// A relative path of `depth` four-letter segments.
    pub fn deep_relative(depth: usize) -> PathBuf {
        (0..depth)
            .map(|i| {
                let start = u8::try_from(i % 26).unwrap();
                (0..4u8)
                    .map(|offset| char::from(b'a' + (start + offset) % 26))
                    .collect::<String>()
            })
            .collect()
    }
}
