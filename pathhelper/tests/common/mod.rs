//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder that lays out a defaults file and a
//! fragment directory in a temporary location.

use std::fs;
use std::path::{Path, PathBuf};

use pathhelper::{LogLevel, Logger, PathSource};
use tempfile::TempDir;

/// A logger that prints nothing.
#[allow(dead_code)]
pub fn quiet_logger() -> Logger {
    Logger::new(LogLevel::Quiet)
}

/// Builder for a temporary paths layout.
///
/// # Examples
///
/// ```no_run
/// # use common::PathsFixture;
/// let fixture = PathsFixture::new("PATH")
///     .with_defaults("/usr/bin\n/bin\n")
///     .with_fragment("50-extra", "/opt/local/bin\n")
///     .build();
/// ```
#[allow(dead_code)]
pub struct PathsFixture {
    var_name: String,
    defaults: Option<String>,
    fragments: Vec<(String, Vec<u8>)>,
    subdirs: Vec<String>,
    create_dir: bool,
}

/// A built layout. The files live as long as this value.
#[allow(dead_code)]
pub struct Paths {
    temp_dir: TempDir,
    /// The source pointing at the layout.
    pub source: PathSource,
}

#[allow(dead_code)]
impl Paths {
    /// Root of the temporary layout.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the fragment directory.
    pub fn fragments_dir(&self) -> PathBuf {
        self.source.fragments_dir().to_path_buf()
    }
}

#[allow(dead_code)]
impl PathsFixture {
    /// Creates a builder for `var_name` with no defaults file and an empty
    /// fragment directory.
    pub fn new(var_name: &str) -> Self {
        Self {
            var_name: var_name.to_string(),
            defaults: None,
            fragments: Vec::new(),
            subdirs: Vec::new(),
            create_dir: true,
        }
    }

    /// Writes the defaults file with `content`.
    pub fn with_defaults(mut self, content: &str) -> Self {
        self.defaults = Some(content.to_string());
        self
    }

    /// Adds a fragment file.
    pub fn with_fragment(mut self, name: &str, content: &str) -> Self {
        self.fragments
            .push((name.to_string(), content.as_bytes().to_vec()));
        self
    }

    /// Adds a fragment file with raw bytes.
    pub fn with_fragment_bytes(mut self, name: &str, content: &[u8]) -> Self {
        self.fragments.push((name.to_string(), content.to_vec()));
        self
    }

    /// Adds a subdirectory (containing one file) inside the fragment directory.
    pub fn with_subdir(mut self, name: &str) -> Self {
        self.subdirs.push(name.to_string());
        self
    }

    /// Leaves the fragment directory uncreated.
    pub fn without_dir(mut self) -> Self {
        self.create_dir = false;
        self
    }

    /// Creates the files.
    pub fn build(self) -> Paths {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let defaults_file = temp_dir.path().join("paths");
        let fragments_dir = temp_dir.path().join("paths.d");

        if let Some(content) = &self.defaults {
            fs::write(&defaults_file, content).expect("Failed to write defaults file");
        }

        if self.create_dir {
            fs::create_dir(&fragments_dir).expect("Failed to create fragment directory");
            for (name, content) in &self.fragments {
                fs::write(fragments_dir.join(name), content).expect("Failed to write fragment");
            }
            for name in &self.subdirs {
                let sub = fragments_dir.join(name);
                fs::create_dir(&sub).expect("Failed to create subdirectory");
                fs::write(sub.join("nested"), "/nested/bin\n").expect("Failed to write nested file");
            }
        }

        Paths {
            temp_dir,
            source: PathSource::new(self.var_name, defaults_file, fragments_dir),
        }
    }
}
