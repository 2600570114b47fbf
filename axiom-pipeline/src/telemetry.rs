//! Tracing setup for pipeline hosts.

use tracing_subscriber::EnvFilter;

use axiom_core::config::ObservabilityConfig;

/// Initialize the tracing subscriber with structured JSON output.
///
/// The `AXIOM_LOG` environment variable wins over the configured level, so
/// operators can raise verbosity without a config change.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env("AXIOM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .init();
}
