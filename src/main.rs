//! Nameplate: an HTTP service that reports its configured application name.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from the process environment, initializes tracing,
//! sets up the Axum router, and starts the HTTP server.

mod config;
mod http;
mod middleware;
mod routes;
mod state;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT};
use routes::create_router;
use state::AppState;

/// Nameplate: an HTTP service that reports its configured application name
#[derive(Parser, Debug)]
#[command(name = "nameplate", version, about)]
struct Args {
    /// Address to bind the HTTP listener on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind the HTTP listener on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log level filter (e.g., "nameplate=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format ("text" or "json")
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; the environment is read once, here
    let config = AppConfig::from_env(args.host, args.port, args.log_format)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(app_name = %config.app_name, "Loaded configuration");

    // Create application state
    let state = AppState::new(config.clone());

    // Create router
    let app = create_router(state);

    // Start server
    http::serve(app, &config).await?;

    Ok(())
}
