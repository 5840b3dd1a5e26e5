//! CLI command implementations.
//!
//! - `emit`: Construct PATH (and MANPATH if set) and print the assignments

pub mod emit;

pub use emit::EmitCommand;
