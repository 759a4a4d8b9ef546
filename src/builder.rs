use std::io::Write;

use crate::engine::{run, OpenConfig};
use crate::error::PhyloError;
use crate::fs::FsSource;
use crate::results::Results;
use crate::traits::Source;

// ---------------------------------------------------------------------------
// ListBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a listing.
///
/// Created via [`phylo::list()`](crate::list). Configure with chained
/// builder methods, then call [`run()`](ListBuilder::run) with the sink.
///
/// # Example
///
/// ```rust,no_run
/// let mut out = Vec::<u8>::new();
/// let results = phylo::list("/tmp/*")
///     .case_insensitive(true)
///     .run(&mut out)?;
///
/// println!("{} entries", results.stats.listed);
/// # Ok::<(), phylo::PhyloError>(())
/// ```
pub struct ListBuilder {
    pattern: String,
    source:  Option<Box<dyn Source>>,
    config:  OpenConfig,
}

impl ListBuilder {
    pub(crate) fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            source:  None,
            config:  OpenConfig::default(),
        }
    }

    // ── Source ────────────────────────────────────────────────────────────

    /// Enumerate from a custom source instead of the local filesystem.
    pub fn source(mut self, s: impl Source + 'static) -> Self {
        self.source = Some(Box::new(s));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Match the last pattern segment ignoring case.
    ///
    /// Defaults to `true` on Windows and `false` elsewhere, following the
    /// host filesystem.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.config.case_insensitive = yes;
        self
    }

    /// Report the targets of symlinks rather than the links. Off by default.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.config.follow_links = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Enumerate the pattern and write one line per entry to `out`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the pattern cannot be opened or writing to `out`
    /// fails. An error after enumeration started is reported in
    /// [`Results::interrupted`] instead, since part of the listing has
    /// already been written.
    pub fn run<W: Write + ?Sized>(self, out: &mut W) -> Result<Results, PhyloError> {
        match self.source {
            Some(source) => run(source.as_ref(), &self.pattern, &self.config, out),
            None         => run(&FsSource, &self.pattern, &self.config, out),
        }
    }
}
