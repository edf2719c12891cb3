//! Fixture queries: live, today's, and upcoming matches.

use std::sync::Arc;

use chrono::Utc;
use footballdata_api::types::{LeagueId, Match, MatchId};
use footballdata_api::{Client, MatchQuery};

use crate::cache::CacheStore;
use crate::error::FootballDataError;
use crate::ttl::CacheTtl;

use super::league_or_all;

const CATEGORY: &str = "match";

/// Cached access to fixture data. Live and near-term queries use the short
/// TTL classes and tighten further during match hours.
pub struct MatchesService {
    client: Arc<Client>,
    cache: Arc<CacheStore>,
}

impl MatchesService {
    pub fn new(client: Arc<Client>, cache: Arc<CacheStore>) -> Self {
        Self { client, cache }
    }

    /// Matches currently in play, optionally filtered to one competition.
    pub async fn live_matches(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Match>, FootballDataError> {
        let key = format!("liveMatches:{}", league_or_all(league_id));
        self.cache
            .get_or_set(&key, CacheTtl::Short, true, Some(CATEGORY), || async {
                let mut query = MatchQuery::default().live();
                if let Some(id) = league_id {
                    query = query.with_league(id);
                }
                Ok(self.client.get_matches(&query).await?.response)
            })
            .await
    }

    /// All fixtures kicking off today (UTC).
    pub async fn today_matches(
        &self,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Match>, FootballDataError> {
        let key = format!("todayMatches:{}", league_or_all(league_id));
        self.cache
            .get_or_set(&key, CacheTtl::Short, true, Some(CATEGORY), || async {
                let mut query = MatchQuery::default().with_date(Utc::now().date_naive());
                if let Some(id) = league_id {
                    query = query.with_league(id);
                }
                Ok(self.client.get_matches(&query).await?.response)
            })
            .await
    }

    /// Fixtures within the next `days` days.
    pub async fn upcoming_matches(
        &self,
        days: i64,
        league_id: Option<LeagueId>,
    ) -> Result<Vec<Match>, FootballDataError> {
        let key = format!("upcomingMatches:{}:{}", days, league_or_all(league_id));
        self.cache
            .get_or_set(&key, CacheTtl::Standard, true, Some(CATEGORY), || async {
                let mut query = MatchQuery::default().with_next_days(days);
                if let Some(id) = league_id {
                    query = query.with_league(id);
                }
                Ok(self.client.get_matches(&query).await?.response)
            })
            .await
    }

    /// A single fixture with its running score.
    pub async fn match_details(&self, match_id: MatchId) -> Result<Match, FootballDataError> {
        let key = format!("matchDetails:{}", match_id);
        self.cache
            .get_or_set(&key, CacheTtl::Short, true, Some(CATEGORY), || async {
                Ok(self.client.get_match(match_id).await?)
            })
            .await
    }

    /// Drops every cached fixture read.
    pub fn invalidate_all(&self) {
        self.cache.clear_by_category(CATEGORY);
    }

    /// Drops the cached detail entry for one fixture. Exact removal, so
    /// match 4 never takes match 40's entry with it.
    pub fn invalidate_match(&self, match_id: MatchId) {
        self.cache.clear(Some(&format!("matchDetails:{}", match_id)));
    }
}
