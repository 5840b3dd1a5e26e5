//! Build script for pathhelper-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("path_helper")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Construct PATH and MANPATH from /etc/paths and /etc/paths.d")
        .long_about(
            "Reads /etc/paths and the files in /etc/paths.d, in case-insensitive \
             name order, and prints a shell command that sets PATH. Entries already \
             in PATH are kept after the listed ones. If MANPATH is set, it is built \
             the same way from /etc/manpaths and /etc/manpaths.d.",
        )
        .arg(
            Arg::new("csh")
                .short('c')
                .help("Emit C-shell commands (setenv)")
                .action(ArgAction::SetTrue)
                .conflicts_with("sh"),
        )
        .arg(
            Arg::new("sh")
                .short('s')
                .help("Emit Bourne shell commands (export)")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli()).section("8");
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("path_helper.8"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
