use anyhow::Result;
use clap::Args;

use crate::output::{
    print_json, print_leagues_table, print_matches_table, print_standings_table, OutputFormat,
};
use crate::App;

#[derive(Args)]
pub struct LeaguesArgs {
    /// Get a single league by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Filter by country name (e.g. England)
    #[arg(long)]
    pub country: Option<String>,

    /// Show the league table (requires --id)
    #[arg(long)]
    pub standings: bool,

    /// Show the season's fixtures (requires --id)
    #[arg(long)]
    pub fixtures: bool,

    /// Season starting year. Defaults to the league's current season.
    #[arg(long)]
    pub season: Option<i64>,
}

pub async fn run(args: &LeaguesArgs, app: &App, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let league = app.leagues.league_details(id).await?;
        let season = args.season.unwrap_or(league.current_season);

        if args.standings {
            let standings = app.leagues.standings(id, season).await?;
            match format {
                OutputFormat::Table => print_standings_table(&standings),
                OutputFormat::Json => print_json(&standings)?,
            }
            return Ok(());
        }
        if args.fixtures {
            let fixtures = app.leagues.fixtures(id, season).await?;
            match format {
                OutputFormat::Table => print_matches_table(&fixtures),
                OutputFormat::Json => print_json(&fixtures)?,
            }
            return Ok(());
        }

        match format {
            OutputFormat::Table => print_leagues_table(std::slice::from_ref(&league)),
            OutputFormat::Json => print_json(&league)?,
        }
        return Ok(());
    }

    let leagues = app.leagues.leagues(args.country.as_deref()).await?;
    match format {
        OutputFormat::Table => print_leagues_table(&leagues),
        OutputFormat::Json => print_json(&leagues)?,
    }
    Ok(())
}
