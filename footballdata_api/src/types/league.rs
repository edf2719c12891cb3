//! Competition and standings types.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Numeric identifier for a league or competition.
pub type LeagueId = i64;

/// Season starting year (e.g. 2025 for the 2025/26 season).
pub type Season = i64;

/// Competition metadata returned by the `/leagues` endpoints.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct League {
    /// Unique numeric league identifier.
    pub league_id: LeagueId,

    pub name: String,

    pub country: String,

    /// Logo URL, if the API exposes one.
    pub logo: Option<String>,

    /// The season currently in play.
    pub current_season: Season,
}

/// One row of a league table.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub rank: i64,
    pub team_id: TeamId,
    pub team_name: String,
    pub played: i64,
    pub won: i64,
    pub drawn: i64,
    pub lost: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
    /// Recent results as a compact string (e.g. `"WWDLW"`).
    pub form: Option<String>,
}
