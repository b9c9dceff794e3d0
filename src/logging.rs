//! Logging setup
//!
//! `RUST_LOG` takes precedence. Without it the level is `info`, or
//! `debug` when the generator runs with `--debug`. Logs go to stderr so
//! stdout stays free for the build plan.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Verbose logging for tests; safe to call more than once
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
