mod common;
mod league;
mod matches;
mod team;

pub use common::{Query, QueryCommon};
pub use league::LeagueQuery;
pub use matches::MatchQuery;
pub use team::TeamQuery;
