//! The path-construction engine.
//!
//! A path variable is built from three sources, in this order:
//!
//! 1. a defaults file such as `/etc/paths`, one segment per line;
//! 2. every regular file in a fragment directory such as `/etc/paths.d`,
//!    taken in case-insensitive name order;
//! 3. the variable's current value in the environment, split on `:`.
//!
//! Lines from files are [sanitized](sanitize) so that they can be placed
//! inside a double-quoted shell string. Segments are accumulated in a
//! [`PathValue`], which keeps the first occurrence of each segment.
//!
//! # Examples
//!
//! ```
//! use pathhelper::path::{sanitize, PathValue};
//!
//! let mut value = PathValue::new();
//! for line in ["/usr/bin\n", "/bin\n", "/usr/bin\n", "\n"] {
//!     value.append(sanitize(line.as_bytes()));
//! }
//! value.merge_colon_list(b"/bin:/opt/bin");
//! assert_eq!(value.to_string(), "/usr/bin:/bin:/opt/bin");
//! ```

pub mod constructor;
pub mod fragment;
pub mod listing;
pub mod segment;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::borrow::Cow;
use std::ffi::OsStr;

pub use constructor::{construct, PathConstructor};
pub use fragment::{append_lines, read_fragment_file, FileContribution, ReadStats};
pub use listing::{compare_names, list_fragments};
pub use segment::{sanitize, Segment};
pub use value::{AppendOutcome, PathValue, SEPARATOR};

#[cfg(unix)]
pub(crate) fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
pub(crate) fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}
