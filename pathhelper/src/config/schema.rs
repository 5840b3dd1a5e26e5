//! Configuration types.

use std::path::{Path, PathBuf};

use crate::config::Environment;
use crate::error::{Error, Result};

/// Overrides the defaults file for `PATH`.
pub const PATHS_FILE_VAR: &str = "PATH_HELPER_PATHS_FILE";
/// Overrides the fragment directory for `PATH`.
pub const PATHS_DIR_VAR: &str = "PATH_HELPER_PATHS_DIR";
/// Overrides the defaults file for `MANPATH`.
pub const MANPATHS_FILE_VAR: &str = "PATH_HELPER_MANPATHS_FILE";
/// Overrides the fragment directory for `MANPATH`.
pub const MANPATHS_DIR_VAR: &str = "PATH_HELPER_MANPATHS_DIR";

/// The inputs for constructing one path variable.
///
/// # Examples
///
/// ```
/// use pathhelper::PathSource;
/// use std::path::Path;
///
/// let source = PathSource::path();
/// assert_eq!(source.var_name(), "PATH");
/// assert_eq!(source.defaults_file(), Path::new("/etc/paths"));
/// assert_eq!(source.fragments_dir(), Path::new("/etc/paths.d"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSource {
    var_name: String,
    defaults_file: PathBuf,
    fragments_dir: PathBuf,
}

impl PathSource {
    /// Creates a source from its three parts.
    pub fn new(
        var_name: impl Into<String>,
        defaults_file: impl Into<PathBuf>,
        fragments_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            var_name: var_name.into(),
            defaults_file: defaults_file.into(),
            fragments_dir: fragments_dir.into(),
        }
    }

    /// `PATH` from `/etc/paths` and `/etc/paths.d`.
    #[must_use]
    pub fn path() -> Self {
        Self::new("PATH", "/etc/paths", "/etc/paths.d")
    }

    /// `MANPATH` from `/etc/manpaths` and `/etc/manpaths.d`.
    #[must_use]
    pub fn manpath() -> Self {
        Self::new("MANPATH", "/etc/manpaths", "/etc/manpaths.d")
    }

    /// Name of the environment variable being constructed and merged.
    #[must_use]
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// File read first.
    #[must_use]
    pub fn defaults_file(&self) -> &Path {
        &self.defaults_file
    }

    /// Directory whose regular files are read after the defaults file.
    #[must_use]
    pub fn fragments_dir(&self) -> &Path {
        &self.fragments_dir
    }

    /// Returns the source with a different defaults file.
    #[must_use]
    pub fn with_defaults_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.defaults_file = path.into();
        self
    }

    /// Returns the source with a different fragment directory.
    #[must_use]
    pub fn with_fragments_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.fragments_dir = path.into();
        self
    }
}

/// Sources for both variables emitted by `path_helper`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source for `PATH`.
    pub path: PathSource,
    /// Source for `MANPATH`.
    pub manpath: PathSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathSource::path(),
            manpath: PathSource::manpath(),
        }
    }
}

impl Config {
    /// Loads the built-in defaults, then applies `PATH_HELPER_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an override variable is set to the
    /// empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathhelper::{Config, MapEnvironment};
    /// use std::path::Path;
    ///
    /// let env = MapEnvironment::new().with_var("PATH_HELPER_PATHS_DIR", "/tmp/paths.d");
    /// let config = Config::load(&env).unwrap();
    /// assert_eq!(config.path.fragments_dir(), Path::new("/tmp/paths.d"));
    /// assert_eq!(config.path.defaults_file(), Path::new("/etc/paths"));
    /// ```
    pub fn load(env: &dyn Environment) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = override_path(env, PATHS_FILE_VAR)? {
            config.path = config.path.with_defaults_file(file);
        }
        if let Some(dir) = override_path(env, PATHS_DIR_VAR)? {
            config.path = config.path.with_fragments_dir(dir);
        }
        if let Some(file) = override_path(env, MANPATHS_FILE_VAR)? {
            config.manpath = config.manpath.with_defaults_file(file);
        }
        if let Some(dir) = override_path(env, MANPATHS_DIR_VAR)? {
            config.manpath = config.manpath.with_fragments_dir(dir);
        }

        Ok(config)
    }
}

fn override_path(env: &dyn Environment, name: &str) -> Result<Option<PathBuf>> {
    match env.var_os(name) {
        None => Ok(None),
        Some(value) if value.is_empty() => Err(Error::Validation {
            field: name.to_string(),
            message: "must not be empty".to_string(),
        }),
        Some(value) => Ok(Some(PathBuf::from(value))),
    }
}
