mod api;
mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::create::{self, CreateArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::templates::FileTemplateStore;
use crate::infra::zendesk::ZendeskClient;

#[derive(Parser)]
#[command(
    name = "ticketsim",
    author,
    version,
    about = "Create batches of simulated support tickets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the batch ticket API over HTTP.
    Serve,
    /// Create one batch of tickets and print the report as JSON.
    Create(CreateArgs),
    /// List ticket types and whether their templates load.
    Types,
    /// Inspect configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config(args) => config_cmd::run(args.command),
        Commands::Serve => cmd::serve::run(build_context()?).await,
        Commands::Create(args) => {
            let ctx = build_context()?;
            let report = create::run(&ctx, args).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::Types => {
            let config = AppConfig::load()?;
            cmd::types::run(&FileTemplateStore::load(&config.payload_dir));
            Ok(())
        }
    }
}

fn build_context() -> AppResult<AppContext> {
    let config = AppConfig::load()?;
    let templates = Arc::new(FileTemplateStore::load(&config.payload_dir));
    let ticket_service = Arc::new(ZendeskClient::new(
        config.subdomain.clone(),
        config.api_base_url.clone(),
    ));
    Ok(AppContext::new(config, ticket_service, templates))
}
