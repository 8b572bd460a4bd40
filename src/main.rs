//! hellokube crate entrypoint.
//!
//! Starts the Tokio runtime, initializes tracing, and launches the web
//! server defined in the `server` module. Keep this file minimal; the
//! application logic lives in `server`, `config`, and `html`.
//!
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Color lookup and defaults
mod config;
/// HTML rendering and page generation
mod html;
/// HTTP server implementation and request handling
mod server;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    server::run().await
}
