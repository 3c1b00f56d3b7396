// Tracing setup
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Called explicitly from `main`, once, before anything else runs; nothing
/// in the core assumes it happened. Output goes to stderr so log lines never
/// land inside the redrawn dashboard on stdout. Verbosity follows `RUST_LOG`
/// and defaults to `info`.
pub fn init_telemetry() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
