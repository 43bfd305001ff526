pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod runner;

pub use config::{Config, Region};
pub use error::ConnectorError;
pub use infra::http::{StaticTokenProvider, ZohoClient};
pub use runner::{execute, ExecutedItem, Item};

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Wires up stdout plus daily-rolling JSON file logging. Optional: embedding
/// hosts that already own a subscriber should skip this. The returned guard
/// must be held for the file writer to flush.
pub fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("./logs", "zoho-bookings.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("info,zoho_bookings=debug"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();

    info!("Logging initialized. Writing JSON logs to ./logs/");
    guard
}
