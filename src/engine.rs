use std::io::Write;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::PhyloError;
use crate::format::write_entry;
use crate::results::{ListStats, Results};
use crate::traits::Source;

// ---------------------------------------------------------------------------
// OpenConfig
// ---------------------------------------------------------------------------

/// Enumeration parameters passed from the builder to a [`Source`].
///
/// Callers configure these via the builder methods (`.case_insensitive()`,
/// `.follow_links()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenConfig {
    /// Match the last pattern segment ignoring case.
    pub case_insensitive: bool,

    /// Describe symlink targets instead of the links themselves.
    pub follow_links: bool,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            case_insensitive: cfg!(windows),
            follow_links:     false,
        }
    }
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Enumerate `pattern` from `source` and write one line per entry to `out`.
///
/// Called by `ListBuilder::run()`. Open failures are returned as `Err`;
/// a failure mid-enumeration ends the loop and is returned in
/// [`Results::interrupted`] next to the stats for what was written.
pub(crate) fn run<W: Write + ?Sized>(
    source: &dyn Source,
    pattern: &str,
    config: &OpenConfig,
    out: &mut W,
) -> Result<Results, PhyloError> {
    let start = Instant::now();

    // Dropped on every return below, releasing the handle exactly once.
    let enumeration = source.open(pattern, config)?;
    debug!(pattern, "enumeration opened");

    let mut listed      = 0;
    let mut skipped     = 0;
    let mut interrupted = None;

    for item in enumeration {
        let entry = match item {
            Ok(e) => e,
            Err(e) => {
                warn!(pattern, error = %e, "enumeration interrupted");
                interrupted = Some(e);
                break;
            }
        };

        if write_entry(&mut *out, &entry).map_err(PhyloError::Output)? {
            listed += 1;
        } else {
            skipped += 1;
        }
    }

    out.flush().map_err(PhyloError::Output)?;

    let stats = ListStats {
        listed,
        skipped,
        duration: start.elapsed(),
    };
    debug!(pattern, listed, skipped, "enumeration finished");

    Ok(Results { stats, interrupted })
}
