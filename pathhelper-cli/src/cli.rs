//! CLI structure and argument definitions.
//!
//! `path_helper` accepts at most one argument: `-c` or `-s`. Anything else is
//! rejected by clap with a usage message before any path is constructed.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use pathhelper::ShellStyle;

/// Emit shell commands that set PATH and MANPATH.
#[derive(Parser, Debug)]
#[command(name = "path_helper")]
#[command(
    version,
    about = "Construct PATH and MANPATH from /etc/paths and /etc/paths.d",
    long_about = None
)]
pub struct Cli {
    /// Emit C-shell commands (setenv)
    #[arg(short = 'c', conflicts_with = "sh")]
    pub csh: bool,

    /// Emit Bourne shell commands (export)
    #[arg(short = 's')]
    pub sh: bool,
}

impl Cli {
    /// Parse `args` (program name first), allowing at most one argument.
    ///
    /// Clap alone accepts a bare `--` and treats `-s --` as a single flag;
    /// both are rejected here with clap's usage error.
    ///
    /// # Errors
    ///
    /// Returns a clap error for anything but no argument, `-c` or `-s`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        if args.len() > 2 {
            return Err(Self::command().error(
                ErrorKind::TooManyValues,
                "expected at most one argument: -c or -s",
            ));
        }
        if args.iter().skip(1).any(|arg| arg.as_os_str() == "--") {
            return Err(Self::command().error(
                ErrorKind::UnknownArgument,
                "unexpected argument '--' found",
            ));
        }

        Self::try_parse_from(args)
    }

    /// Resolve the output style.
    ///
    /// An explicit flag wins; otherwise the style is detected from `SHELL`.
    pub fn style(&self, shell: Option<&str>) -> ShellStyle {
        if self.csh {
            ShellStyle::CShell
        } else if self.sh {
            ShellStyle::Bourne
        } else {
            ShellStyle::detect(shell)
        }
    }
}
