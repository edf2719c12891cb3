//! Team queries: details, squads, fixtures, and name search.

use std::sync::Arc;

use footballdata_api::types::{Match, Player, Team, TeamId};
use footballdata_api::{Client, MatchQuery, TeamQuery};

use crate::cache::CacheStore;
use crate::error::FootballDataError;
use crate::ttl::CacheTtl;

const TEAM_CATEGORY: &str = "team";
const SQUAD_CATEGORY: &str = "squad";
const SEARCH_CATEGORY: &str = "search";

const MAX_SEARCH_LENGTH: usize = 100;

/// Cached access to team data. Rosters and metadata change rarely, so these
/// sit on the long TTL classes.
pub struct TeamsService {
    client: Arc<Client>,
    cache: Arc<CacheStore>,
}

impl TeamsService {
    pub fn new(client: Arc<Client>, cache: Arc<CacheStore>) -> Self {
        Self { client, cache }
    }

    /// Metadata for a single team.
    pub async fn team_details(&self, team_id: TeamId) -> Result<Team, FootballDataError> {
        let key = format!("teamDetails:{}", team_id);
        self.cache
            .get_or_set(&key, CacheTtl::Long, false, Some(TEAM_CATEGORY), || async {
                Ok(self.client.get_team(team_id).await?)
            })
            .await
    }

    /// The team's current squad.
    pub async fn squad(&self, team_id: TeamId) -> Result<Vec<Player>, FootballDataError> {
        let key = format!("teamSquad:{}", team_id);
        self.cache
            .get_or_set(&key, CacheTtl::Long, false, Some(SQUAD_CATEGORY), || async {
                Ok(self.client.get_squad(team_id).await?.response)
            })
            .await
    }

    /// The team's fixtures within the next `days` days.
    pub async fn team_matches(
        &self,
        team_id: TeamId,
        days: i64,
    ) -> Result<Vec<Match>, FootballDataError> {
        let key = format!("teamMatches:{}:{}", team_id, days);
        self.cache
            .get_or_set(&key, CacheTtl::Standard, true, Some(TEAM_CATEGORY), || async {
                let query = MatchQuery::default()
                    .with_team(team_id)
                    .with_next_days(days);
                Ok(self.client.get_matches(&query).await?.response)
            })
            .await
    }

    /// Name search. The query is trimmed and lowercased before keying so
    /// trivially different spellings share a cache entry.
    pub async fn search(&self, query: &str) -> Result<Vec<Team>, FootballDataError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(FootballDataError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }
        if needle.len() > MAX_SEARCH_LENGTH {
            return Err(FootballDataError::InvalidInput(format!(
                "search query exceeds maximum length of {} bytes",
                MAX_SEARCH_LENGTH
            )));
        }

        let key = format!("searchTeams:{}", needle);
        self.cache
            .get_or_set(&key, CacheTtl::Medium, false, Some(SEARCH_CATEGORY), || async {
                let query = TeamQuery::default().with_search(&needle);
                Ok(self.client.get_teams(&query).await?.response)
            })
            .await
    }

    /// Drops every cached team and squad read together; the two move as one
    /// group when a roster changes.
    pub fn invalidate_all(&self) {
        self.cache.clear_by_category(TEAM_CATEGORY);
        self.cache.clear_by_category(SQUAD_CATEGORY);
    }

    /// Drops the cached entries for one team. Terminal keys are removed
    /// exactly; a substring match on `teamDetails:4` would also take out
    /// team 40.
    pub fn invalidate_team(&self, team_id: TeamId) {
        self.cache.clear(Some(&format!("teamDetails:{}", team_id)));
        self.cache.clear(Some(&format!("teamSquad:{}", team_id)));
        self.cache
            .invalidate_pattern(&format!("teamMatches:{}:", team_id));
    }
}
