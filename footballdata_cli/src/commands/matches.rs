use anyhow::Result;
use clap::Args;

use crate::output::{print_json, print_matches_table, OutputFormat};
use crate::App;

#[derive(Args)]
pub struct MatchesArgs {
    /// Get a single match by ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Only matches currently in play
    #[arg(long)]
    pub live: bool,

    /// Only matches kicking off today (UTC)
    #[arg(long)]
    pub today: bool,

    /// Filter by league ID (e.g. 39 for the Premier League)
    #[arg(long)]
    pub league: Option<i64>,

    /// Days ahead for upcoming matches
    #[arg(long, default_value = "7")]
    pub days: i64,
}

pub async fn run(args: &MatchesArgs, app: &App, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let m = app.matches.match_details(id).await?;
        match format {
            OutputFormat::Table => print_matches_table(std::slice::from_ref(&m)),
            OutputFormat::Json => print_json(&m)?,
        }
        return Ok(());
    }

    let matches = if args.live {
        app.matches.live_matches(args.league).await?
    } else if args.today {
        app.matches.today_matches(args.league).await?
    } else {
        app.matches.upcoming_matches(args.days, args.league).await?
    };

    match format {
        OutputFormat::Table => print_matches_table(&matches),
        OutputFormat::Json => print_json(&matches)?,
    }
    Ok(())
}
