//! Telemetry and Observability
//!
//! Structured logging setup. Output is human-readable during development
//! and JSON lines in production so logs can be shipped without reparsing.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when RUST_LOG is unset.
const DEFAULT_FILTER: &str = "info,banking_server=debug,sqlx=warn,tower_http=info";

/// Initialize the tracing subscriber.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    if matches!(std::env::var("RUN_ENV").as_deref(), Ok("production")) {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }

    tracing::info!("Tracing initialized");
}
