//! Construction of a complete path variable from its sources.

use super::fragment::read_fragment_file;
use super::listing::list_fragments;
use super::os_bytes;
use super::value::PathValue;
use crate::config::{Environment, PathSource};
use crate::error::Result;
use crate::logging::Logger;

/// Builds path values from a [`PathSource`] and an [`Environment`].
///
/// Each call to [`construct`](Self::construct) starts from an empty
/// [`PathValue`]; nothing is shared between calls.
///
/// # Examples
///
/// ```no_run
/// use pathhelper::{Logger, PathConstructor, PathSource, ProcessEnvironment};
///
/// let env = ProcessEnvironment;
/// let constructor = PathConstructor::new(&env, Logger::default());
/// let path = constructor.construct(&PathSource::path()).unwrap();
/// println!("{path}");
/// ```
pub struct PathConstructor<'a> {
    env: &'a dyn Environment,
    logger: Logger,
}

impl<'a> PathConstructor<'a> {
    /// Creates a constructor reading inherited values from `env`.
    #[must_use]
    pub fn new(env: &'a dyn Environment, logger: Logger) -> Self {
        Self { env, logger }
    }

    /// Constructs the value for `source`.
    ///
    /// Segments are taken, in order, from the defaults file, from each regular
    /// file of the fragment directory in [`compare_names`](super::compare_names)
    /// order, and from the inherited value of the variable. The first
    /// occurrence of a segment wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment directory cannot be listed. Missing or
    /// unreadable files are logged and skipped.
    pub fn construct(&self, source: &PathSource) -> Result<PathValue> {
        let mut value = PathValue::new();

        read_fragment_file(&mut value, source.defaults_file(), &self.logger);

        let dir = source.fragments_dir();
        let fragments = list_fragments(dir)?;
        for name in &fragments {
            read_fragment_file(&mut value, &dir.join(name), &self.logger);
        }

        if let Some(inherited) = self.env.var_os(source.var_name()) {
            let merged = value.merge_colon_list(&os_bytes(&inherited));
            log::debug!(
                "{}: {merged} segment(s) kept from the environment",
                source.var_name()
            );
        }

        self.logger.info(&format!(
            "{}: {} segment(s) from {} and {} fragment file(s)",
            source.var_name(),
            value.segments().count(),
            source.defaults_file().display(),
            fragments.len()
        ));
        self.logger.debug(&format!(
            "{} = {}",
            source.var_name(),
            value.to_string_lossy()
        ));
        Ok(value)
    }
}

/// Constructs the value for `source` with a one-off [`PathConstructor`].
///
/// # Errors
///
/// See [`PathConstructor::construct`].
pub fn construct(source: &PathSource, env: &dyn Environment, logger: Logger) -> Result<PathValue> {
    PathConstructor::new(env, logger).construct(source)
}
