use std::fmt;
use std::io::{self, Write};

use crate::entry::Entry;

/// `true` for the `.` and `..` pseudo-entries, which are never listed.
pub fn is_dot_entry(name: &str) -> bool {
    name == "." || name == ".."
}

/// One output line for an [`Entry`]:
///
/// ```text
/// <attrs>/<created>/<accessed>/<modified>/<size>/<name>\n
/// ```
///
/// Timestamps are Unix seconds (see [`FileTime::to_unix_seconds`]),
/// size is in bytes, and the name is written as-is.
///
/// [`FileTime::to_unix_seconds`]: crate::FileTime::to_unix_seconds
#[derive(Debug, Clone, Copy)]
pub struct FormattedLine<'a>(&'a Entry);

impl<'a> FormattedLine<'a> {
    /// `None` for `.` and `..`.
    pub fn new(entry: &'a Entry) -> Option<Self> {
        if is_dot_entry(&entry.name) {
            None
        } else {
            Some(Self(entry))
        }
    }
}

impl fmt::Display for FormattedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.0;
        writeln!(
            f,
            "{}/{}/{}/{}/{}/{}",
            e.attributes,
            e.created.to_unix_seconds(),
            e.accessed.to_unix_seconds(),
            e.modified.to_unix_seconds(),
            e.size,
            e.name,
        )
    }
}

/// Write the line for `entry` to `out`. Returns `false` when the entry was
/// skipped.
pub fn write_entry<W: Write + ?Sized>(out: &mut W, entry: &Entry) -> io::Result<bool> {
    match FormattedLine::new(entry) {
        Some(line) => {
            write!(out, "{line}")?;
            Ok(true)
        }
        None => Ok(false),
    }
}
