//! Cached data-access wrappers over the API client.
//!
//! Each service builds a deterministic cache key from the logical query,
//! picks a TTL class matching the data's volatility, and delegates to
//! [`crate::cache::CacheStore::get_or_set`]. Failure handling is exactly the
//! store's stale-fallback-or-propagate policy; no retry layer lives here.

mod leagues;
mod matches;
mod teams;

pub use leagues::LeaguesService;
pub use matches::MatchesService;
pub use teams::TeamsService;

use footballdata_api::types::LeagueId;

/// Key segment for an optional league filter.
fn league_or_all(league_id: Option<LeagueId>) -> String {
    match league_id {
        Some(id) => id.to_string(),
        None => "all".to_string(),
    }
}
