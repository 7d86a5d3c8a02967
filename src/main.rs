use std::sync::Arc;

use clap::Parser;
use tern::config::{Cli, Config};
use tern::routing::{Router, ServedDir};
use tern::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::from_cli(Cli::parse())?;
    let router = Arc::new(Router::new(ServedDir::new(cfg.files.directory.clone()))?);

    tokio::select! {
        res = server::listener::run(&cfg, router) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
