//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the echo and health handlers
//! - Wire up middleware (tracing, request timeout)
//! - Serve with connection info so the source resolver sees the peer
//! - Stop gracefully on shutdown broadcast or OS signal

use axum::{
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::EchoConfig;
use crate::http::extract::ClientOrigin;
use crate::lifecycle::signals::shutdown_signal;

/// HTTP server reporting how each request's origin resolves.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
}

impl EchoServer {
    /// Create a new server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &EchoConfig) -> Router {
        Router::new()
            .route("/", get(origin_handler))
            .route("/health", get(health_handler))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until `shutdown` fires or the process is signalled.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "Origin echo server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("Origin echo server stopped");
        Ok(())
    }
}

/// Report the resolved origin as JSON.
async fn origin_handler(ClientOrigin(origin): ClientOrigin) -> impl IntoResponse {
    tracing::debug!(
        host = %origin.host,
        proto = %origin.proto,
        source = %origin.source,
        "Resolved request origin"
    );
    Json(origin)
}

async fn health_handler() -> &'static str {
    "ok"
}
