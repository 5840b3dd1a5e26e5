//! Output formatting for constructed path values.
//!
//! A constructed value is emitted as one shell statement per variable, in
//! either Bourne or C-shell syntax.

mod shell;

use std::io::Write;

use crate::path::PathValue;
use crate::Result;

pub use shell::ShellStyle;

/// Writes one assignment statement per `(name, value)` pair, in order.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
///
/// # Examples
///
/// ```
/// use pathhelper::output::{write_assignments, ShellStyle};
/// use pathhelper::PathValue;
///
/// let mut path = PathValue::new();
/// path.append("/usr/bin");
///
/// let mut out = Vec::new();
/// write_assignments(&mut out, ShellStyle::Bourne, &[("PATH", &path)]).unwrap();
/// assert_eq!(out, b"PATH=\"/usr/bin\"; export PATH;\n".to_vec());
/// ```
pub fn write_assignments<W: Write>(
    out: &mut W,
    style: ShellStyle,
    assignments: &[(&str, &PathValue)],
) -> Result<()> {
    for (name, value) in assignments {
        style.write_assignment(out, name, value.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
