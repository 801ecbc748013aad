//! Logging configuration and initialization
//!
//! This module sets up the tracing subscriber for structured logging. Log
//! lines go to stderr so that stdout stays reserved for result records.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system with the specified level
///
/// Sets up tracing with a filter based on the provided log level. An
/// unrecognized level falls back to "info"; `RUST_LOG` takes precedence
/// when set.
pub fn init_logging(log_level: &str) {
    let level = log_level.trim().to_lowercase();

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    let final_level = if valid_levels.contains(&level.as_str()) {
        level
    } else {
        "info".to_string()
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(final_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
