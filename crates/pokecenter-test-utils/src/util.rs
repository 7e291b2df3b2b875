//! Utility functions for tests.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for tests with a default configuration
///
/// `RUST_LOG` overrides the default filter. Safe to call from every test.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pokecenter_core=debug,pokecenter_test_utils=trace"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
