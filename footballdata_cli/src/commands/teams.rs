use anyhow::Result;
use clap::Args;

use crate::output::{
    print_json, print_matches_table, print_squad_table, print_teams_table, OutputFormat,
};
use crate::App;

#[derive(Args)]
pub struct TeamsArgs {
    /// Get a single team by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Show the team's current squad (requires --id)
    #[arg(long)]
    pub squad: bool,

    /// Show the team's fixtures over the next N days (requires --id)
    #[arg(long)]
    pub fixtures: Option<i64>,

    /// Search teams by name
    #[arg(long)]
    pub search: Option<String>,
}

pub async fn run(args: &TeamsArgs, app: &App, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        if args.squad {
            let squad = app.teams.squad(id).await?;
            match format {
                OutputFormat::Table => print_squad_table(&squad),
                OutputFormat::Json => print_json(&squad)?,
            }
            return Ok(());
        }
        if let Some(days) = args.fixtures {
            let fixtures = app.teams.team_matches(id, days).await?;
            match format {
                OutputFormat::Table => print_matches_table(&fixtures),
                OutputFormat::Json => print_json(&fixtures)?,
            }
            return Ok(());
        }

        let team = app.teams.team_details(id).await?;
        match format {
            OutputFormat::Table => print_teams_table(std::slice::from_ref(&team)),
            OutputFormat::Json => print_json(&team)?,
        }
        return Ok(());
    }

    if let Some(search) = &args.search {
        let teams = app.teams.search(search).await?;
        match format {
            OutputFormat::Table => print_teams_table(&teams),
            OutputFormat::Json => print_json(&teams)?,
        }
        return Ok(());
    }

    anyhow::bail!("pass --id or --search");
}
