//! The colon-joined accumulator for a constructed path variable.

use std::borrow::Cow;
use std::fmt;

/// Separator between segments.
pub const SEPARATOR: u8 = b':';

/// Result of [`PathValue::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The segment was added to the end of the value.
    Appended,
    /// The segment was already present; the value is unchanged.
    Duplicate,
    /// The segment was empty; the value is unchanged.
    Empty,
}

/// An ordered, duplicate-free sequence of segments joined by `:`.
///
/// A segment counts as present only when it occurs as a whole: bounded on the
/// left by the start of the value or a `:`, and on the right by the end of the
/// value or a `:`. `/usr/bin` therefore does not collide with `/usr/bin2`.
///
/// # Examples
///
/// ```
/// use pathhelper::PathValue;
///
/// let mut value = PathValue::new();
/// value.append("/usr/bin");
/// value.append("/bin");
/// value.append("/usr/bin");
/// value.append("/usr/bin2");
/// assert_eq!(value.as_bytes(), b"/usr/bin:/bin:/usr/bin2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathValue {
    buf: Vec<u8>,
}

impl PathValue {
    /// Creates an empty value.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `segment` unless it is empty or already present.
    pub fn append(&mut self, segment: impl AsRef<[u8]>) -> AppendOutcome {
        let segment = segment.as_ref();
        if segment.is_empty() {
            return AppendOutcome::Empty;
        }
        if self.contains(segment) {
            return AppendOutcome::Duplicate;
        }

        self.buf.reserve(segment.len() + 1);
        if !self.buf.is_empty() {
            self.buf.push(SEPARATOR);
        }
        self.buf.extend_from_slice(segment);
        AppendOutcome::Appended
    }

    /// Splits `seed` on `:` and appends each piece, left to right.
    ///
    /// Leading, trailing and doubled separators yield empty pieces, which are
    /// dropped. Returns the number of pieces actually appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathhelper::PathValue;
    ///
    /// let mut value = PathValue::new();
    /// value.merge_colon_list(b"a::b:");
    /// assert_eq!(value.as_bytes(), b"a:b");
    /// ```
    pub fn merge_colon_list(&mut self, seed: &[u8]) -> usize {
        seed.split(|&b| b == SEPARATOR)
            .filter(|piece| self.append(piece) == AppendOutcome::Appended)
            .count()
    }

    /// Returns whether `segment` occurs as a whole segment.
    ///
    /// The match is on raw bytes, so a `segment` that itself contains `:`
    /// matches a run of adjacent segments.
    #[must_use]
    pub fn contains(&self, segment: impl AsRef<[u8]>) -> bool {
        let segment = segment.as_ref();
        let hay = &self.buf;
        if segment.is_empty() || segment.len() > hay.len() {
            return false;
        }

        (0..=hay.len() - segment.len()).any(|start| {
            let end = start + segment.len();
            &hay[start..end] == segment
                && (start == 0 || hay[start - 1] == SEPARATOR)
                && (end == hay.len() || hay[end] == SEPARATOR)
        })
    }

    /// Iterates over the `:`-separated pieces of the value.
    pub fn segments(&self) -> impl Iterator<Item = &[u8]> {
        self.buf
            .split(|&b| b == SEPARATOR)
            .filter(|piece| !piece.is_empty())
    }

    /// Returns the joined value.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the value, returning the joined bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Length of the joined value in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns whether no segment has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the joined value as text, replacing invalid UTF-8.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }
}

impl AsRef<[u8]> for PathValue {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
