mod commands;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use footballdata_lib::cache::CacheStore;
use footballdata_lib::{Client, LeaguesService, MatchesService, TeamsService};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "footballdata")]
#[command(about = "Browse football competitions, standings, and fixtures")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Live, today's, and upcoming matches
    Matches(commands::matches::MatchesArgs),
    /// Competitions, standings, and season fixtures
    Leagues(commands::leagues::LeaguesArgs),
    /// Team details, squads, and search
    Teams(commands::teams::TeamsArgs),
    /// Cache statistics and invalidation
    Cache(commands::cache::CacheArgs),
}

/// Everything the commands need, built once in main and passed down.
pub struct App {
    pub matches: MatchesService,
    pub leagues: LeaguesService,
    pub teams: TeamsService,
    pub cache: Arc<CacheStore>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("footballdata=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let api_key = std::env::var("FOOTBALLDATA_API_KEY")
        .context("FOOTBALLDATA_API_KEY must be set")?;
    let client = match std::env::var("FOOTBALLDATA_BASE_URL") {
        Ok(base_url) => Client::with_base_url(&base_url, api_key),
        Err(_) => Client::new(api_key),
    }?;
    let client = Arc::new(client);

    let cache = Arc::new(CacheStore::new());
    let app = App {
        matches: MatchesService::new(Arc::clone(&client), Arc::clone(&cache)),
        leagues: LeaguesService::new(Arc::clone(&client), Arc::clone(&cache)),
        teams: TeamsService::new(Arc::clone(&client), Arc::clone(&cache)),
        cache,
    };

    match &cli.command {
        Commands::Matches(args) => commands::matches::run(args, &app, &format).await?,
        Commands::Leagues(args) => commands::leagues::run(args, &app, &format).await?,
        Commands::Teams(args) => commands::teams::run(args, &app, &format).await?,
        Commands::Cache(args) => commands::cache::run(args, &app, &format)?,
    }

    Ok(())
}
