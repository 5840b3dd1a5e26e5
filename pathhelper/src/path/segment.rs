//! Conversion of raw fragment-file lines into quotable path segments.

use std::fmt;

/// A single path component, escaped for use inside a double-quoted shell
/// string.
///
/// Every `"`, `'` and `$` is preceded by a backslash. A segment never
/// contains a newline. Segments are produced only by [`sanitize`] and are
/// never escaped twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Segment(Vec<u8>);

impl Segment {
    /// Returns the escaped bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the segment, returning the escaped bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes, escapes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the segment is empty (a blank line).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Segment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'"' | b'\'' | b'$')
}

/// Sanitizes one line read from a fragment file.
///
/// Copying stops at the first `\n`, which is dropped along with anything
/// after it. A `\r` is an ordinary byte and is kept.
///
/// # Examples
///
/// ```
/// use pathhelper::path::sanitize;
///
/// assert_eq!(sanitize(b"/usr/local/bin\n").as_bytes(), b"/usr/local/bin");
/// assert_eq!(sanitize(b"my\"path").as_bytes(), b"my\\\"path");
/// assert_eq!(sanitize(b"/opt/$HOME").as_bytes(), b"/opt/\\$HOME");
/// assert!(sanitize(b"\n").is_empty());
/// ```
#[must_use]
pub fn sanitize(line: &[u8]) -> Segment {
    let line = match line.iter().position(|&b| b == b'\n') {
        Some(end) => &line[..end],
        None => line,
    };

    let escapes = line.iter().filter(|&&b| needs_escape(b)).count();
    let mut out = Vec::with_capacity(line.len() + escapes);
    for &byte in line {
        if needs_escape(byte) {
            out.push(b'\\');
        }
        out.push(byte);
    }

    Segment(out)
}
