//! Reading fragment files into a [`PathValue`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::segment::sanitize;
use super::value::{AppendOutcome, PathValue};
use crate::logging::Logger;

/// What a single fragment file contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileContribution {
    /// The file could not be opened; nothing was appended.
    Unreadable,
    /// The file was read (possibly only in part, see [`ReadStats::truncated`]).
    Read(ReadStats),
}

/// Counters for one fragment file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Lines read.
    pub lines: usize,
    /// Segments newly appended.
    pub appended: usize,
    /// Segments already present.
    pub duplicates: usize,
    /// Whether reading stopped early on an I/O error.
    pub truncated: bool,
}

impl FileContribution {
    /// Number of segments the file added to the value.
    #[must_use]
    pub fn appended(&self) -> usize {
        match self {
            Self::Unreadable => 0,
            Self::Read(stats) => stats.appended,
        }
    }
}

/// Appends every line of `path` to `value`, in file order.
///
/// A file that cannot be opened is reported as a warning and contributes
/// nothing. A read error part way through keeps the lines already appended.
pub fn read_fragment_file(value: &mut PathValue, path: &Path, logger: &Logger) -> FileContribution {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            logger.warn(&format!("{}: {e}", path.display()));
            return FileContribution::Unreadable;
        }
    };

    let stats = append_lines(value, BufReader::new(file), path, logger);
    FileContribution::Read(stats)
}

/// Appends every line of `reader` to `value`, in order.
///
/// `path` only labels the warning and debug output. A read error stops the
/// loop and sets [`ReadStats::truncated`]; lines appended before it are kept.
pub fn append_lines<R: BufRead>(
    value: &mut PathValue,
    mut reader: R,
    path: &Path,
    logger: &Logger,
) -> ReadStats {
    let mut stats = ReadStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {
                stats.lines += 1;
                match value.append(sanitize(&line)) {
                    AppendOutcome::Appended => stats.appended += 1,
                    AppendOutcome::Duplicate => stats.duplicates += 1,
                    AppendOutcome::Empty => {}
                }
            }
            Err(e) => {
                logger.warn(&format!("{}: {e}", path.display()));
                stats.truncated = true;
                break;
            }
        }
    }

    log::debug!(
        "{}: {} line(s), {} appended, {} duplicate(s)",
        path.display(),
        stats.lines,
        stats.appended,
        stats.duplicates
    );

    stats
}
