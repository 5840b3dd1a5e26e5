//! Enumeration of fragment files in a `.d` directory.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use super::os_bytes;
use crate::error::{Error, Result};

/// Compares two file names the way `.d` directories are processed.
///
/// Names are compared byte-wise after ASCII case folding. Names equal under
/// folding are ordered by their raw bytes so the order is total.
///
/// # Examples
///
/// ```
/// use pathhelper::path::compare_names;
/// use std::cmp::Ordering;
/// use std::ffi::OsStr;
///
/// assert_eq!(compare_names(OsStr::new("10-tools"), OsStr::new("2-custom")), Ordering::Less);
/// assert_eq!(compare_names(OsStr::new("2-custom"), OsStr::new("a-extra")), Ordering::Less);
/// assert_eq!(compare_names(OsStr::new("B"), OsStr::new("a")), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_names(a: &OsStr, b: &OsStr) -> Ordering {
    let a = os_bytes(a);
    let b = os_bytes(b);
    let folded = a
        .iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase));
    folded.then_with(|| a.cmp(&b))
}

/// Lists the regular files directly inside `dir`, sorted by [`compare_names`].
///
/// Subdirectories are skipped and never descended into, so the listing
/// cannot leave the directory's filesystem. Symbolic links are resolved: a
/// link to a regular file is listed under the link's name, while dangling
/// links and links to anything else are skipped.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `dir` is not a directory, and
/// [`Error::DirectoryUnreadable`] if it cannot be opened or enumerated.
pub fn list_fragments(dir: &Path) -> Result<Vec<OsString>> {
    let unreadable = |source: std::io::Error| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(dir).map_err(unreadable)?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                log::debug!("skipping {}: {e}", entry.path().display());
                continue;
            }
        };

        let is_file = if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(target) => target.is_file(),
                Err(e) => {
                    log::debug!("skipping dangling link {}: {e}", entry.path().display());
                    false
                }
            }
        } else {
            file_type.is_file()
        };

        if is_file {
            names.push(entry.file_name());
        }
    }

    names.sort_by(|a, b| compare_names(a, b));
    log::debug!("{}: {} fragment file(s)", dir.display(), names.len());
    Ok(names)
}
