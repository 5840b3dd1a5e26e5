//! Shell detection and assignment formatting.

use std::io::{self, Write};

/// Syntax used for the emitted assignment statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellStyle {
    /// `NAME="value"; export NAME;`
    #[default]
    Bourne,
    /// `setenv NAME "value";`
    CShell,
}

impl ShellStyle {
    /// Detect the style from the value of `SHELL`.
    ///
    /// Any shell whose path contains `csh` (`csh`, `tcsh`) gets C-shell
    /// syntax. Everything else, including an unset `SHELL`, gets Bourne
    /// syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathhelper::output::ShellStyle;
    ///
    /// assert_eq!(ShellStyle::detect(Some("/bin/tcsh")), ShellStyle::CShell);
    /// assert_eq!(ShellStyle::detect(Some("/bin/zsh")), ShellStyle::Bourne);
    /// assert_eq!(ShellStyle::detect(None), ShellStyle::Bourne);
    /// ```
    #[must_use]
    pub fn detect(shell: Option<&str>) -> Self {
        match shell {
            Some(path) if path.contains("csh") => Self::CShell,
            _ => Self::Bourne,
        }
    }

    /// Format an assignment statement for this style.
    ///
    /// `value` is placed inside double quotes verbatim; it must already be
    /// escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathhelper::output::ShellStyle;
    ///
    /// assert_eq!(
    ///     ShellStyle::Bourne.format_assignment("PATH", "/usr/bin:/bin"),
    ///     "PATH=\"/usr/bin:/bin\"; export PATH;"
    /// );
    /// assert_eq!(
    ///     ShellStyle::CShell.format_assignment("PATH", "/usr/bin:/bin"),
    ///     "setenv PATH \"/usr/bin:/bin\";"
    /// );
    /// ```
    #[must_use]
    pub fn format_assignment(&self, name: &str, value: &str) -> String {
        match self {
            Self::Bourne => format!("{name}=\"{value}\"; export {name};"),
            Self::CShell => format!("setenv {name} \"{value}\";"),
        }
    }

    /// Write the assignment statement and a newline to `out`.
    ///
    /// Unlike [`format_assignment`](Self::format_assignment), the value is
    /// written as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_assignment<W: Write>(&self, out: &mut W, name: &str, value: &[u8]) -> io::Result<()> {
        match self {
            Self::Bourne => {
                write!(out, "{name}=\"")?;
                out.write_all(value)?;
                writeln!(out, "\"; export {name};")
            }
            Self::CShell => {
                write!(out, "setenv {name} \"")?;
                out.write_all(value)?;
                writeln!(out, "\";")
            }
        }
    }
}
