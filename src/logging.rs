use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `PHYLO_LOG=debug`.
pub const LOG_ENV: &str = "PHYLO_LOG";

/// Install the global subscriber: compact lines on standard error, filtered
/// by [`LOG_ENV`] and silent when it is unset.
///
/// Standard output is left to the listing. Calling this twice is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
