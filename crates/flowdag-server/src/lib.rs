//! HTTP transport for the flowdag analysis core.
//!
//! The server is deliberately thin: one POST route that deserializes a
//! pipeline and returns the analysis report, one liveness ping, and a
//! CORS layer permitting the browser editor's dev origins. All request
//! handling is stateless — the handler owns its deserialized pipeline
//! and the derived graph dies with the request.
use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;

/// Runtime configuration for the server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the listener on.
    pub bind: SocketAddr,
    /// Browser origins the CORS layer allows.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    /// Local development defaults: loopback bind, the editor's two
    /// default dev-server origins.
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cors_origins: vec![
                "http://localhost:3000".to_owned(),
                "http://localhost:3001".to_owned(),
            ],
        }
    }
}

/// Builds the application router with the CORS and trace layers applied.
///
/// # Errors
///
/// Fails when a configured CORS origin is not a valid header value.
pub fn create_router(config: &ServerConfig) -> anyhow::Result<Router> {
    let mut origins: Vec<HeaderValue> = Vec::with_capacity(config.cors_origins.len());
    for origin in &config.cors_origins {
        let value = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("invalid CORS origin {origin:?}"))?;
        origins.push(value);
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    Ok(routes::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Binds the listener and serves the application until shutdown.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(addr = %config.bind, "flowdag server listening");

    axum::serve(listener, app)
        .await
        .context("error running the server")
}
