//! fedigraph command-line entry point.

mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use fedigraph_client::FediClient;
use fedigraph_common::Config;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Cli;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fedigraph=info,fedigraph_client=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };
    if let Some(token) = cli.token {
        config.client.token = Some(token);
    }

    debug!(endpoint = %config.client.endpoint, "Configuration loaded");

    let client = FediClient::new(&config)?;
    let result = commands::run(&client, cli.command).await;
    client.close();
    result
}
