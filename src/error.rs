use thiserror::Error;

/// Errors surfaced by the lister and the command line.
///
/// The `Display` text of each variant is the diagnostic line the command
/// line prints for it.
#[derive(Error, Debug)]
pub enum PhyloError {
    // Command line
    #[error("Expected 2 arguments: operation arg")]
    Usage,

    #[error("Unknown operation. Should be \"dir\".")]
    UnknownOperation(String),

    // Enumeration
    #[error("Failed to read \"{}\" ({})", .pattern, os_code(.source))]
    EnumerationOpen {
        pattern: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read \"{pattern}\" (invalid pattern)")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed while reading \"{}\" ({})", .pattern, os_code(.source))]
    Enumeration {
        pattern: String,
        #[source]
        source: std::io::Error,
    },

    // Output
    #[error("failed to write output")]
    Output(#[source] std::io::Error),

    // Third-party extensibility
    #[error("source error: {0}")]
    Source(String),
}

impl PhyloError {
    /// Process exit code for this error.
    ///
    /// An unknown operation exits 0: existing callers only check for the
    /// listing failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownOperation(_) => 0,
            Self::Usage => 1,
            Self::EnumerationOpen { .. } | Self::InvalidPattern { .. } => 2,
            Self::Enumeration { .. } | Self::Source(_) => 3,
            Self::Output(_) => 4,
        }
    }

    /// The OS error code carried by this error, if any.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Self::EnumerationOpen { source, .. }
            | Self::Enumeration { source, .. }
            | Self::Output(source) => source.raw_os_error(),
            _ => None,
        }
    }

    /// Whether this error happened while opening the pattern, before any
    /// entry was produced.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, Self::EnumerationOpen { .. } | Self::InvalidPattern { .. })
    }
}

fn os_code(err: &std::io::Error) -> i32 {
    err.raw_os_error().unwrap_or(-1)
}
