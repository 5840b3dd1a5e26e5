//! Library exports for pathhelper-cli.
//!
//! This module exports the CLI structure for use in tests and by tools that
//! generate documentation.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::Cli;
