// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Sets up the logging framework using tracing_subscriber.
/// Filters come from the `RUST_LOG` environment variable, defaulting to
/// "info" when it is unset.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false) // single-binary tool, module paths add noise
        .init();

    tracing::debug!("Logging setup complete.");
}
