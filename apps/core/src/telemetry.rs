//! Structured logging setup.
//!
//! Bunyan-formatted JSON lines on stderr, filtered by `RUST_LOG` (default
//! `info`). Stdout stays reserved for reading output.

use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::error::AppError;

/// Composes the subscriber without installing it.
pub fn get_subscriber<Sink>(name: &str, default_filter: &str, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.to_string(), sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs a subscriber as the global default. Call once at startup.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), AppError> {
    set_global_default(subscriber)
        .map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
