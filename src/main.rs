//! sub-service: a single-endpoint greeting microservice.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 SUB-SERVICE                   │
//!                    │                                               │
//!   GET /            │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│ listener │──▶│   http   │──▶│ greeting │  │
//!                    │  └──────────┘   │  server  │   │ handler  │  │
//!   200 {"world":…}  │                 └──────────┘   └────┬─────┘  │
//!   ◀────────────────┼──────────────────────────────────────┘       │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │         Cross-Cutting Concerns           │  │
//!                    │  │  ┌────────┐ ┌──────────┐ ┌───────────┐  │  │
//!                    │  │  │ config │ │ identity │ │ lifecycle │  │  │
//!                    │  │  └────────┘ └──────────┘ └───────────┘  │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The single route answers with a JSON greeting carrying the service
//! descriptor. Everything else (404s for other paths, 405 for other
//! methods) is framework-default behavior.

use clap::Parser;
use sub_service::config::{load_config, AppConfig};
use sub_service::http::HttpServer;
use sub_service::identity::ServiceIdentity;
use sub_service::lifecycle::{bind_listener, signals, Shutdown};
use sub_service::observability::logging;

#[derive(Parser)]
#[command(name = "sub-service")]
#[command(about = "Versioned greeting microservice", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults are used when absent.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.logging);

    let identity = ServiceIdentity::from_config(&config.service);
    tracing::info!(
        bind_address = %config.listener.bind_address,
        version = %identity.version,
        base_path = %identity.base_path,
        descriptor = %identity.descriptor,
        "Configuration loaded"
    );

    // Bind before serving so a taken port fails the process outright.
    let listener = bind_listener(&config.listener).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(&config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
