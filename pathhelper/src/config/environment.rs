//! Access to environment variables.
//!
//! The constructor and the configuration loader never read the process
//! environment directly. They receive an [`Environment`], so tests can supply
//! a [`MapEnvironment`] instead of mutating global state.

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

/// Read-only view of a set of environment variables.
pub trait Environment {
    /// Returns the value of `name`, or `None` if it is unset.
    ///
    /// A variable set to the empty string is `Some("")`, not `None`.
    fn var_os(&self, name: &str) -> Option<OsString>;

    /// Returns whether `name` is set at all.
    fn is_set(&self, name: &str) -> bool {
        self.var_os(name).is_some()
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }
}

/// An in-memory environment.
///
/// # Examples
///
/// ```
/// use pathhelper::{Environment, MapEnvironment};
///
/// let env = MapEnvironment::new().with_var("PATH", "/usr/bin:/bin");
/// assert!(env.is_set("PATH"));
/// assert!(!env.is_set("MANPATH"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, OsString>,
}

impl MapEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the environment with `name` set to `value`.
    #[must_use]
    pub fn with_var(mut self, name: &str, value: impl AsRef<OsStr>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl AsRef<OsStr>) {
        self.vars
            .insert(name.to_string(), value.as_ref().to_os_string());
    }

    /// Unsets `name`.
    pub fn remove(&mut self, name: &str) {
        self.vars.remove(name);
    }
}

impl Environment for MapEnvironment {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).cloned()
    }
}
