mod league;
mod matches;
mod meta;
mod team;

pub use league::{League, LeagueId, Season, Standing};
pub use matches::{Match, MatchId, MatchSide, MatchStatus};
pub use meta::{ApiItem, ApiResponse};
pub use team::{Player, Team, TeamId};
