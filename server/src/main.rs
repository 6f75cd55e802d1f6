//! HealthSpace web host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server-renders the Leptos client and serves its WASM/CSS bundle. All
//! application data lives behind the external HealthSpace REST API, which the
//! browser calls directly; this process holds no state of its own.

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // Missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "healthspace host failed");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {e}");
    }
}

async fn run() -> Result<(), StartupError> {
    let host = HostConfig::from_env()?;
    let conf = leptos::prelude::get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = host.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "healthspace listening");
    axum::serve(listener, app).await?;
    Ok(())
}
