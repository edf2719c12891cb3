use anyhow::Result;
use footballdata_lib::cache::CacheStats;
use footballdata_lib::types::{League, Match, Player, Standing, Team};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct MatchRow {
    #[tabled(rename = "Kickoff")]
    #[serde(rename = "Kickoff")]
    kickoff: String,
    #[tabled(rename = "Home")]
    #[serde(rename = "Home")]
    home: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Away")]
    #[serde(rename = "Away")]
    away: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

impl From<&Match> for MatchRow {
    fn from(m: &Match) -> Self {
        let score = match (m.home.goals, m.away.goals) {
            (Some(h), Some(a)) => format!("{} - {}", h, a),
            _ => "-".to_string(),
        };
        let status = match m.minute {
            Some(minute) => format!("{} ({}')", m.status, minute),
            None => m.status.to_string(),
        };
        Self {
            kickoff: m.kickoff.format("%Y-%m-%d %H:%M").to_string(),
            home: m.home.name.clone(),
            score,
            away: m.away.name.clone(),
            status,
        }
    }
}

#[derive(Tabled, Serialize)]
struct LeagueRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    league_id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Season")]
    #[serde(rename = "Season")]
    season: i64,
}

#[derive(Tabled, Serialize)]
struct StandingRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    rank: i64,
    #[tabled(rename = "Team")]
    #[serde(rename = "Team")]
    team: String,
    #[tabled(rename = "P")]
    #[serde(rename = "P")]
    played: i64,
    #[tabled(rename = "W")]
    #[serde(rename = "W")]
    won: i64,
    #[tabled(rename = "D")]
    #[serde(rename = "D")]
    drawn: i64,
    #[tabled(rename = "L")]
    #[serde(rename = "L")]
    lost: i64,
    #[tabled(rename = "GD")]
    #[serde(rename = "GD")]
    goal_difference: i64,
    #[tabled(rename = "Pts")]
    #[serde(rename = "Pts")]
    points: i64,
    #[tabled(rename = "Form")]
    #[serde(rename = "Form")]
    form: String,
}

#[derive(Tabled, Serialize)]
struct TeamRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    team_id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Country")]
    #[serde(rename = "Country")]
    country: String,
    #[tabled(rename = "Founded")]
    #[serde(rename = "Founded")]
    founded: String,
    #[tabled(rename = "Venue")]
    #[serde(rename = "Venue")]
    venue: String,
}

#[derive(Tabled, Serialize)]
struct PlayerRow {
    #[tabled(rename = "#")]
    #[serde(rename = "#")]
    number: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    #[serde(rename = "Position")]
    position: String,
    #[tabled(rename = "Age")]
    #[serde(rename = "Age")]
    age: String,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table<R: Tabled>(rows: Vec<R>) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_matches_table(matches: &[Match]) {
    print_table(matches.iter().map(MatchRow::from).collect());
}

pub fn print_leagues_table(leagues: &[League]) {
    print_table(
        leagues
            .iter()
            .map(|l| LeagueRow {
                league_id: l.league_id,
                name: l.name.clone(),
                country: l.country.clone(),
                season: l.current_season,
            })
            .collect(),
    );
}

pub fn print_standings_table(standings: &[Standing]) {
    print_table(
        standings
            .iter()
            .map(|s| StandingRow {
                rank: s.rank,
                team: s.team_name.clone(),
                played: s.played,
                won: s.won,
                drawn: s.drawn,
                lost: s.lost,
                goal_difference: s.goal_difference,
                points: s.points,
                form: s.form.clone().unwrap_or_default(),
            })
            .collect(),
    );
}

pub fn print_teams_table(teams: &[Team]) {
    print_table(
        teams
            .iter()
            .map(|t| TeamRow {
                team_id: t.team_id,
                name: t.name.clone(),
                country: t.country.clone().unwrap_or_default(),
                founded: t.founded.map(|y| y.to_string()).unwrap_or_default(),
                venue: t.venue.clone().unwrap_or_default(),
            })
            .collect(),
    );
}

pub fn print_squad_table(players: &[Player]) {
    print_table(
        players
            .iter()
            .map(|p| PlayerRow {
                number: p.number.map(|n| n.to_string()).unwrap_or_default(),
                name: p.name.clone(),
                position: p.position.clone().unwrap_or_default(),
                age: p.age.map(|a| a.to_string()).unwrap_or_default(),
            })
            .collect(),
    );
}

pub fn print_cache_stats(stats: &CacheStats) {
    println!("Entries: {}", stats.size);
    let mut categories: Vec<_> = stats.categories.iter().collect();
    categories.sort();
    for (category, count) in categories {
        println!("  {}: {}", category, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use footballdata_lib::types::{MatchSide, MatchStatus};

    #[test]
    fn match_row_formats_score_and_minute() {
        let m = Match {
            match_id: 1,
            league_id: 39,
            season: 2025,
            kickoff: Utc.with_ymd_and_hms(2025, 8, 30, 16, 30, 0).unwrap(),
            status: MatchStatus::Live,
            minute: Some(57),
            venue: None,
            home: MatchSide {
                team_id: 40,
                name: "Liverpool".to_string(),
                goals: Some(2),
            },
            away: MatchSide {
                team_id: 42,
                name: "Arsenal".to_string(),
                goals: Some(1),
            },
        };
        let row = MatchRow::from(&m);
        assert_eq!(row.score, "2 - 1");
        assert_eq!(row.status, "live (57')");
    }

    #[test]
    fn match_row_before_kickoff_has_no_score() {
        let m = Match {
            match_id: 1,
            league_id: 39,
            season: 2025,
            kickoff: Utc.with_ymd_and_hms(2025, 8, 31, 15, 0, 0).unwrap(),
            status: MatchStatus::Scheduled,
            minute: None,
            venue: None,
            home: MatchSide {
                team_id: 40,
                name: "Liverpool".to_string(),
                goals: None,
            },
            away: MatchSide {
                team_id: 42,
                name: "Arsenal".to_string(),
                goals: None,
            },
        };
        let row = MatchRow::from(&m);
        assert_eq!(row.score, "-");
        assert_eq!(row.status, "scheduled");
    }
}
