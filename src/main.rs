//! hostd: a minimal greeting and health-check HTTP service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, sets up the axum router, and starts the
//! HTTP server. Failure to bind the listener is fatal and exits non-zero;
//! nothing that happens inside a request can bring the process down.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostd::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hostd::error::AppError;
use hostd::routes::create_router;
use hostd::shutdown::shutdown_signal;

/// hostd: greeting and health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "hostd", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Listen port (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "hostd=debug,axum=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let mut config = AppConfig::load(&args.config)?;
    if let Some(port) = args.port {
        config.http.port = port;
    }
    tracing::info!(host = %config.http.host, port = config.http.port, "Loaded configuration");

    // Create router
    let app = create_router();

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind listener");
            return Err(e.into());
        }
    };

    // Plain stdout line so orchestration logs show the port without a
    // tracing formatter in the way.
    println!("Server running on port {}...", config.http.port);
    tracing::info!("Starting server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
