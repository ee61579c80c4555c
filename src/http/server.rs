//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the greeting handler
//! - Wire up middleware (request ID, tracing, request timeout)
//! - Serve on a bound listener until shutdown
//!
//! The route is registered at the process root `/`. The identity's
//! `base_path` is advertised for deployments that mount the service behind a
//! prefix-stripping proxy; the service itself does not mount under it.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::request::UuidRequestId;
use crate::identity::ServiceIdentity;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<ServiceIdentity>,
}

/// HTTP server for the greeting service.
pub struct HttpServer {
    router: Router,
    identity: Arc<ServiceIdentity>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: &AppConfig) -> Self {
        let identity = Arc::new(ServiceIdentity::from_config(&config.service));
        let state = AppState {
            identity: identity.clone(),
        };

        let router = Self::build_router(config, state);
        Self { router, identity }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::greeting))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            descriptor = %self.identity.descriptor,
            base_path = %self.identity.base_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
