use std::time::Duration;

use crate::error::PhyloError;

/// The output of a completed listing.
///
/// The lines themselves went to the sink passed to
/// [`ListBuilder::run`](crate::ListBuilder::run); this only reports on them.
#[derive(Debug)]
pub struct Results {
    /// Listing statistics.
    pub stats: ListStats,

    /// The error that ended enumeration early, if any.
    /// Lines written before it are kept.
    pub interrupted: Option<PhyloError>,
}

impl Results {
    /// `true` when every entry was enumerated.
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }
}

/// Statistics for a completed listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStats {
    /// Lines written.
    pub listed: usize,

    /// Entries enumerated but not written (`.` and `..`).
    pub skipped: usize,

    /// Wall-clock time from open to completion.
    pub duration: Duration,
}
