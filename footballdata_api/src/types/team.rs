//! Team and squad types.

use serde::{Deserialize, Serialize};

/// Numeric identifier for a team.
pub type TeamId = i64;

/// Team metadata returned by the `/teams` endpoints.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Unique numeric team identifier.
    pub team_id: TeamId,

    pub name: String,

    pub country: Option<String>,

    /// Year the club was founded.
    pub founded: Option<i64>,

    /// Home stadium name.
    pub venue: Option<String>,

    pub logo: Option<String>,
}

/// A squad member returned by the `/teams/{id}/squad` endpoint.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_id: i64,
    pub name: String,
    pub position: Option<String>,
    /// Shirt number, when assigned.
    pub number: Option<i64>,
    pub age: Option<i64>,
}
