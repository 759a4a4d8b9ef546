//! # phylo
//!
//! A minimal directory lister.
//!
//! Given a path pattern, phylo enumerates the matching entries and writes
//! one line per entry:
//!
//! ```text
//! <attrs>/<created>/<accessed>/<modified>/<size>/<name>
//! ```
//!
//! `attrs` are the set flags among `D`irectory, `R`ead-only, `H`idden,
//! `S`ystem, `A`rchive, `C`ompressed and `E`ncrypted, in that order. The
//! three timestamps are Unix seconds truncated to 32 bits, `size` is in
//! bytes, and `.`/`..` are never listed.
//!
//! Patterns follow `FindFirstFile`: `*` and `?` are wildcards in the last
//! path segment only. A pattern without wildcards lists that one entry.
//!
//! # Quick Start
//!
//! ```rust
//! use phylo::{Attributes, Entry, Enumeration, FileTime, OpenConfig, PhyloError, Source};
//!
//! // A fixed in-memory source for demonstration
//! struct Fixed(Vec<Entry>);
//!
//! impl Source for Fixed {
//!     fn open(&self, _pattern: &str, _config: &OpenConfig) -> Result<Enumeration, PhyloError> {
//!         Ok(Box::new(self.0.clone().into_iter().map(Ok::<_, PhyloError>)))
//!     }
//! }
//!
//! let docs = Entry {
//!     name:       "docs".into(),
//!     attributes: Attributes::DIRECTORY | Attributes::HIDDEN,
//!     created:    FileTime::UNIX_EPOCH,
//!     accessed:   FileTime::UNIX_EPOCH,
//!     modified:   FileTime::UNIX_EPOCH,
//!     size:       0,
//! };
//!
//! let mut out = Vec::<u8>::new();
//! let results = phylo::list("*")
//!     .source(Fixed(vec![Entry::directory("."), docs]))
//!     .run(&mut out)
//!     .unwrap();
//!
//! assert_eq!(results.stats.listed, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "DH/0/0/0/0/docs\n");
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod engine;
pub mod logging;

mod attributes;
mod builder;
mod entry;
mod error;
mod filetime;
mod format;
mod fs;
mod pattern;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use attributes::Attributes;
pub use builder::ListBuilder;
pub use engine::OpenConfig;
pub use entry::Entry;
pub use error::PhyloError;
pub use filetime::{FileTime, SEC_TO_UNIX_EPOCH, WINDOWS_TICK};
pub use format::{is_dot_entry, write_entry, FormattedLine};
pub use fs::FsSource;
pub use pattern::Pattern;
pub use results::{ListStats, Results};
pub use traits::{Enumeration, Source};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`ListBuilder`] for `pattern`.
///
/// # Example
///
/// ```rust,no_run
/// let stdout = std::io::stdout();
/// let results = phylo::list("./*").run(&mut stdout.lock())?;
/// assert!(results.is_complete());
/// # Ok::<(), phylo::PhyloError>(())
/// ```
pub fn list(pattern: impl Into<String>) -> ListBuilder {
    ListBuilder::new(pattern)
}
