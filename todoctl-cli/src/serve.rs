//! HTTP server command
//!
//! Runs the todoctl HTTP API server until interrupted.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::ServerConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on (PaaS platforms inject PORT)
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Database file path (default: ~/.todoctl/todos.db)
    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_path = match args.db_path {
        Some(path) => path,
        None => default_db_path().context("Could not determine home directory")?,
    };

    tracing::info!("Starting todoctl server on {}:{}", args.bind, args.port);

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.bind, args.port),
        db_path,
    };

    // Run server (blocks until shutdown)
    todoctl_server::run_server(config)
        .await
        .context("Server error")?;

    Ok(())
}

fn default_db_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".todoctl").join("todos.db"))
}
