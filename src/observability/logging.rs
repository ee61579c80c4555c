//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honor RUST_LOG, falling back to the configured filter
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Environment always wins over the config file filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// Call once from main; a second call panics by subscriber design.
pub fn init(config: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
