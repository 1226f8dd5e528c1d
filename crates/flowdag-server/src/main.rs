//! Binary entry point for the flowdag HTTP server.
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowdag_server::{ServerConfig, serve};

/// Serve the flowdag pipeline analysis API over HTTP.
#[derive(Parser)]
#[command(name = "flowdag-server", about = "HTTP API for pipeline graph analysis")]
struct Args {
    /// Socket address to bind.
    #[arg(long, env = "FLOWDAG_BIND", default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Browser origin allowed by the CORS layer (repeatable, or
    /// comma-separated via the environment variable).
    #[arg(
        long = "cors-origin",
        env = "FLOWDAG_CORS_ORIGINS",
        value_delimiter = ',',
        default_values_t = vec![
            "http://localhost:3000".to_owned(),
            "http://localhost:3001".to_owned(),
        ]
    )]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowdag_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    serve(ServerConfig {
        bind: args.bind,
        cors_origins: args.cors_origins,
    })
    .await
}
