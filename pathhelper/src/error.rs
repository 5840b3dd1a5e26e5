//! Error types for the pathhelper library.
//!
//! Only failures that abort a construction are represented here. A fragment
//! file that cannot be opened is not an error: it is reported through the
//! [`Logger`](crate::Logger) and contributes nothing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathhelper error.
///
/// # Examples
///
/// ```
/// use pathhelper::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/usr/bin")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathhelper library.
#[derive(Debug, Error)]
pub enum Error {
    /// The fragment directory could not be opened or enumerated.
    #[error("cannot read fragment directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The fragment directory path exists but does not name a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error came from listing a fragment directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathhelper::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotADirectory { path: PathBuf::from("/etc/paths") };
    /// assert!(err.is_directory_error());
    /// ```
    #[must_use]
    pub fn is_directory_error(&self) -> bool {
        matches!(
            self,
            Self::DirectoryUnreadable { .. } | Self::NotADirectory { .. }
        )
    }
}
