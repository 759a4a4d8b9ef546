use std::fs::{self, ReadDir};
use std::io;
use std::iter;
use std::path::PathBuf;

use globset::GlobMatcher;
use tracing::{debug, trace};

use crate::engine::OpenConfig;
use crate::entry::Entry;
use crate::error::PhyloError;
use crate::format::is_dot_entry;
use crate::pattern::Pattern;
use crate::traits::{Enumeration, Source};

/// OS code reported when a pattern matches nothing.
/// `ENOENT` on POSIX and `ERROR_FILE_NOT_FOUND` on Windows are both 2.
const NO_MATCH_CODE: i32 = 2;

// ---------------------------------------------------------------------------
// FsSource
// ---------------------------------------------------------------------------

/// Enumerates the local filesystem with `FindFirstFile`-style semantics.
///
/// - A last segment containing `*` or `?` lists the matching entries of the
///   directory before it, `.` and `..` included, in OS order.
/// - Any other pattern names a single entry, which is listed on its own.
///   With case-insensitive matching it is reported under its stored name.
/// - A trailing `.*` also matches names without an extension, so `*.*`
///   lists everything.
///
/// Opening fails if the location cannot be read or nothing matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl Source for FsSource {
    fn open(&self, pattern: &str, config: &OpenConfig) -> Result<Enumeration, PhyloError> {
        let pattern = Pattern::parse(pattern);
        if pattern.has_wildcards() {
            open_glob(pattern, config)
        } else {
            open_single(pattern, config)
        }
    }
}

fn open_single(pattern: Pattern, config: &OpenConfig) -> Result<Enumeration, PhyloError> {
    // `dir/` and bare roots name no entry.
    if pattern.segment().is_empty() {
        return Err(open_error(&pattern, io::Error::from_raw_os_error(NO_MATCH_CODE)));
    }

    let name = if config.case_insensitive {
        stored_name(&pattern).unwrap_or_else(|| pattern.segment().to_string())
    } else {
        pattern.segment().to_string()
    };

    let path = pattern.dir().join(&name);
    let metadata = if config.follow_links {
        fs::metadata(&path)
    } else {
        fs::symlink_metadata(&path)
    }
    .map_err(|e| open_error(&pattern, e))?;

    let entry = Entry::from_metadata(name, &metadata);
    Ok(Box::new(iter::once(Ok::<_, PhyloError>(entry))))
}

/// The name as stored in the directory, found by a case-blind lookup of the
/// last segment. An exact match wins over a case-folded one.
fn stored_name(pattern: &Pattern) -> Option<String> {
    let wanted = pattern.segment();
    if is_dot_entry(wanted) {
        return None;
    }

    let folded = wanted.to_lowercase();
    let mut found = None;
    for dirent in fs::read_dir(pattern.dir()).ok()?.flatten() {
        let name = dirent.file_name();
        let Some(name) = name.to_str() else { continue };
        if name == wanted {
            return Some(name.to_string());
        }
        if found.is_none() && name.to_lowercase() == folded {
            found = Some(name.to_string());
        }
    }
    found
}

fn open_glob(pattern: Pattern, config: &OpenConfig) -> Result<Enumeration, PhyloError> {
    let matcher = pattern.matcher(config.case_insensitive)?;
    let dir = pattern.dir().to_path_buf();
    let read_dir = fs::read_dir(&dir).map_err(|e| open_error(&pattern, e))?;

    let mut listing = DirListing {
        dir,
        matcher,
        read_dir,
        dots:         [".", ".."].into_iter(),
        follow_links: config.follow_links,
        done:         false,
    };

    // The open only succeeds once something matches.
    let first = match listing.next() {
        Some(Ok(entry)) => entry,
        Some(Err(e)) => return Err(open_error(&pattern, e)),
        None => {
            debug!(pattern = pattern.raw(), "no entries match");
            return Err(open_error(&pattern, io::Error::from_raw_os_error(NO_MATCH_CODE)));
        }
    };

    let raw = pattern.raw().to_string();
    let rest = listing.map(move |item| {
        item.map_err(|source| PhyloError::Enumeration {
            pattern: raw.clone(),
            source,
        })
    });
    Ok(Box::new(iter::once(Ok(first)).chain(rest)))
}

fn open_error(pattern: &Pattern, source: io::Error) -> PhyloError {
    PhyloError::EnumerationOpen {
        pattern: pattern.raw().to_string(),
        source,
    }
}

// ---------------------------------------------------------------------------
// DirListing
// ---------------------------------------------------------------------------

/// Entries of one directory whose names match a glob, `.` and `..` first.
/// Stops after the first read error.
struct DirListing {
    dir:          PathBuf,
    matcher:      GlobMatcher,
    read_dir:     ReadDir,
    dots:         std::array::IntoIter<&'static str, 2>,
    follow_links: bool,
    done:         bool,
}

impl DirListing {
    fn dot_entry(&self, name: &str) -> Entry {
        match fs::metadata(self.dir.join(name)) {
            Ok(md) => Entry::from_metadata(name, &md),
            Err(_) => Entry::directory(name),
        }
    }
}

impl Iterator for DirListing {
    type Item = io::Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(name) = self.dots.next() {
            if self.matcher.is_match(name) {
                return Some(Ok(self.dot_entry(name)));
            }
        }

        loop {
            let dirent = match self.read_dir.next()? {
                Ok(d) => d,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            let file_name = dirent.file_name();
            if !self.matcher.is_match(&file_name) {
                continue;
            }
            let name = file_name.to_string_lossy().into_owned();

            let metadata = if self.follow_links {
                fs::metadata(dirent.path())
            } else {
                dirent.metadata()
            };

            match metadata {
                Ok(md) => return Some(Ok(Entry::from_metadata(name, &md))),
                // Removed since the directory was read.
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    trace!(name = %name, "entry vanished during enumeration");
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
