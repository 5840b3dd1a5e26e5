#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathhelper
//!
//! A library for constructing `PATH` and `MANPATH` values.
//!
//! A value is merged from a defaults file (`/etc/paths`), the files of a
//! fragment directory (`/etc/paths.d`) and the variable's inherited value,
//! keeping the first occurrence of every segment. The result is emitted as a
//! Bourne or C-shell assignment.
//!
//! ## Core Types
//!
//! - [`PathValue`]: Ordered, duplicate-free colon-joined accumulator
//! - [`PathConstructor`] and [`PathSource`]: Construction of one variable
//! - [`Config`] and [`Environment`]: Inputs and explicit environment access
//! - [`ShellStyle`]: Assignment syntax
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathhelper::PathValue;
//!
//! let mut value = PathValue::new();
//! value.append("/usr/bin");
//! value.merge_colon_list(b"/bin:/usr/bin:/usr/bin2");
//! assert_eq!(value.to_string(), "/usr/bin:/bin:/usr/bin2");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, Environment, MapEnvironment, PathSource, ProcessEnvironment};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::ShellStyle;
pub use path::{construct, PathConstructor, PathValue, Segment};
