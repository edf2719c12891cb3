//! Match (fixture) types returned by the `/matches` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::league::LeagueId;
use super::team::TeamId;

/// Numeric identifier for a match.
pub type MatchId = i64;

/// A single fixture, scheduled or played.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Unique numeric match identifier.
    pub match_id: MatchId,

    /// Competition this fixture belongs to.
    pub league_id: LeagueId,

    /// Season the fixture belongs to (starting year, e.g. 2025).
    pub season: i64,

    /// Scheduled kickoff, UTC.
    pub kickoff: DateTime<Utc>,

    pub status: MatchStatus,

    /// Minute of play for in-progress matches.
    pub minute: Option<i64>,

    pub venue: Option<String>,

    pub home: MatchSide,
    pub away: MatchSide,
}

/// One side of a fixture with its running score.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchSide {
    pub team_id: TeamId,
    pub name: String,
    /// `None` before kickoff.
    pub goals: Option<i64>,
}

/// Lifecycle state of a fixture, as reported by the API.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    HalfTime,
    Finished,
    Postponed,
    Cancelled,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::HalfTime => "half-time",
            MatchStatus::Finished => "finished",
            MatchStatus::Postponed => "postponed",
            MatchStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", s)
    }
}
