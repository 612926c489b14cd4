//! origin-echo: reports the client origin each request resolves to.
//!
//! ```text
//!     Client ──▶ proxy / load balancer ──▶ origin-echo
//!                (adds Forwarded,            GET /  → {"host","proto","source"}
//!                 X-Forwarded-*)             GET /health → ok
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use forwarded_origin::config::{load_config, EchoConfig};
use forwarded_origin::http::EchoServer;
use forwarded_origin::lifecycle::Shutdown;
use forwarded_origin::observability::init_logging;

#[derive(Parser)]
#[command(name = "origin-echo")]
#[command(about = "Echo the host, scheme and client address a request resolves to", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EchoConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability.log_level);

    tracing::info!("origin-echo v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_path = ?cli.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = EchoServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
