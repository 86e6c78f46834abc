use tracing_subscriber::EnvFilter;

/// Initialize tracing output on stderr.
///
/// Logging is off by default so it never mixes with the interactive prompts
/// on stdout; set e.g. `SETLIST_LOG=debug` to enable it.
pub fn init() {
    let filter = EnvFilter::try_from_env("SETLIST_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
