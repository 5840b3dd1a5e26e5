//! Configuration for path construction.
//!
//! This module provides:
//! - [`PathSource`]: the variable name, defaults file and fragment directory
//!   for one constructed variable
//! - [`Config`]: the `PATH` and `MANPATH` sources, with `PATH_HELPER_*`
//!   environment overrides
//! - [`Environment`]: explicit access to environment variables
//!
//! # Configuration Precedence
//!
//! 1. Environment variables (`PATH_HELPER_PATHS_FILE`, `PATH_HELPER_PATHS_DIR`,
//!    `PATH_HELPER_MANPATHS_FILE`, `PATH_HELPER_MANPATHS_DIR`)
//! 2. Built-in defaults (`/etc/paths`, `/etc/paths.d`, `/etc/manpaths`,
//!    `/etc/manpaths.d`)

pub mod environment;
pub mod schema;

pub use environment::{Environment, MapEnvironment, ProcessEnvironment};
pub use schema::{
    Config, PathSource, MANPATHS_DIR_VAR, MANPATHS_FILE_VAR, PATHS_DIR_VAR, PATHS_FILE_VAR,
};
