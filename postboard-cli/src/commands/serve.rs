//! HTTP server command
//!
//! Opens the SQLite database and runs the postboard API until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::{create_pool, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "POSTBOARD_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// SQLite database URL, file is created if missing
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://postboard.db")]
    pub database_url: String,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database = %args.database_url, "Opening database");

    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", args.database_url))?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
