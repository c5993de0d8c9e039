// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use aggregator_mock::api::{self, AppState};
use aggregator_mock::clock::{SharedClock, SystemClock};
use aggregator_mock::config::{AppConfig, LoggingConfig};
use aggregator_mock::content::load_content;
use aggregator_mock::groups::load_groups;
use aggregator_mock::server;
use aggregator_mock::storage::MemoryStorage;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Mock of the Insights results aggregator REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Default)]
enum Command {
    /// Start the REST API service (default)
    #[default]
    StartService,
    /// Print the effective configuration as JSON
    PrintConfig,
    /// Print version and build information
    PrintVersionInfo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let cfg = AppConfig::load()?;

    match cli.command.unwrap_or_default() {
        Command::StartService => {
            init_tracing(&cfg.logging);
            start_service(cfg).await
        }
        Command::PrintConfig => {
            println!("{}", serde_json::to_string_pretty(&cfg)?);
            Ok(())
        }
        Command::PrintVersionInfo => {
            for (key, value) in api::build_info() {
                println!("{key}: {value}");
            }
            Ok(())
        }
    }
}

async fn start_service(cfg: AppConfig) -> anyhow::Result<()> {
    let clock: SharedClock = Arc::new(SystemClock);

    let groups = load_groups(&cfg.groups.path)?;
    let content = load_content(&cfg.content.path)?;
    if !cfg.server.api_spec_file.is_file() {
        bail!("OpenAPI specification file {} not found", cfg.server.api_spec_file.display());
    }
    let storage = MemoryStorage::load(&cfg.paths.mock_data, clock.clone())
        .context("unable to initialize storage")?;

    let state = AppState::new(Arc::new(storage), groups, content, clock)?;
    let exit = state.shutdown.clone();
    let app = api::router(state, &cfg.server);

    let listener = server::bind(&cfg.server.address).await?;
    tracing::info!(
        address = %cfg.server.address,
        prefix = %cfg.server.api_prefix,
        debug = cfg.server.debug,
        "starting results aggregator mock"
    );

    server::serve(
        listener,
        app,
        cfg.server.read_header_timeout(),
        server::shutdown_signal(exit),
    )
    .await?;

    tracing::info!("results aggregator mock exited cleanly");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
