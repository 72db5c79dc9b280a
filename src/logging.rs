// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber for the binary.
///
/// `RUST_LOG` overrides the default `info` filter, e.g.
/// `RUST_LOG=safety_stock_sim=debug` to see every order placed and received.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Verbose subscriber routed through the test harness writer.
/// Safe to call from several tests.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
