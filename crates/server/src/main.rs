use clap::Parser;

use crate::config::AppConfig;

pub(crate) mod config;
pub(crate) mod database;
pub(crate) mod error;
pub(crate) mod models;
pub(crate) mod server;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    tracing_subscriber::fmt::init();

    server::run_all(&config).await?;

    Ok(())
}
