//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated layout of paths files and fragment
//! directories, and a command builder pointed at it through the
//! `PATH_HELPER_*` overrides.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with its own paths and manpaths layout.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Stand-in for `/etc/paths`
    pub paths_file: PathBuf,
    /// Stand-in for `/etc/paths.d`
    pub paths_dir: PathBuf,
    /// Stand-in for `/etc/manpaths`
    pub manpaths_file: PathBuf,
    /// Stand-in for `/etc/manpaths.d`
    pub manpaths_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with both fragment directories present
    /// and no defaults files.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let env = Self {
            paths_file: root.join("paths"),
            paths_dir: root.join("paths.d"),
            manpaths_file: root.join("manpaths"),
            manpaths_dir: root.join("manpaths.d"),
            temp_dir,
        };
        fs::create_dir(&env.paths_dir).expect("Failed to create paths.d");
        fs::create_dir(&env.manpaths_dir).expect("Failed to create manpaths.d");
        env
    }

    /// Root of the temporary layout.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the paths defaults file.
    pub fn write_paths(&self, content: &str) {
        fs::write(&self.paths_file, content).expect("Failed to write paths");
    }

    /// Write a file in the paths fragment directory.
    pub fn write_paths_fragment(&self, name: &str, content: &str) {
        fs::write(self.paths_dir.join(name), content).expect("Failed to write fragment");
    }

    /// Write the manpaths defaults file.
    pub fn write_manpaths(&self, content: &str) {
        fs::write(&self.manpaths_file, content).expect("Failed to write manpaths");
    }

    /// Write a file in the manpaths fragment directory.
    pub fn write_manpaths_fragment(&self, name: &str, content: &str) {
        fs::write(self.manpaths_dir.join(name), content).expect("Failed to write fragment");
    }

    /// Get a bare command builder without any environment configured.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("path_helper").expect("Failed to find path_helper binary")
    }

    /// Get a command builder with a clean environment pointed at this layout.
    ///
    /// `PATH` is set to `/usr/bin:/bin`, `SHELL` to `/bin/sh`, and `MANPATH`
    /// is unset.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env_clear()
            .env("PATH_HELPER_PATHS_FILE", &self.paths_file)
            .env("PATH_HELPER_PATHS_DIR", &self.paths_dir)
            .env("PATH_HELPER_MANPATHS_FILE", &self.manpaths_file)
            .env("PATH_HELPER_MANPATHS_DIR", &self.manpaths_dir)
            .env("PATH", "/usr/bin:/bin")
            .env("SHELL", "/bin/sh");
        cmd
    }

    /// Run `cmd` and return its stdout, asserting success.
    pub fn stdout(&self, cmd: &mut Command) -> String {
        let output = cmd.output().expect("Failed to run path_helper");
        assert!(
            output.status.success(),
            "path_helper failed: {}",
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
