//! Competition queries: league lists, standings, and season fixtures.

use std::sync::Arc;

use footballdata_api::types::{League, LeagueId, Match, Season, Standing};
use footballdata_api::{Client, LeagueQuery, MatchQuery};

use crate::cache::CacheStore;
use crate::error::FootballDataError;
use crate::ttl::CacheTtl;

const CATEGORY: &str = "league";

/// Cached access to competition metadata and tables. These back semi-static
/// resources, so nothing here opts into the match-hours adjustment.
pub struct LeaguesService {
    client: Arc<Client>,
    cache: Arc<CacheStore>,
}

impl LeaguesService {
    pub fn new(client: Arc<Client>, cache: Arc<CacheStore>) -> Self {
        Self { client, cache }
    }

    /// Competitions, optionally filtered by country.
    pub async fn leagues(&self, country: Option<&str>) -> Result<Vec<League>, FootballDataError> {
        let key = format!("leagues:{}", country.unwrap_or("all"));
        self.cache
            .get_or_set(&key, CacheTtl::Day, false, Some(CATEGORY), || async {
                let mut query = LeagueQuery::default().current_only();
                if let Some(country) = country {
                    query = query.with_country(country);
                }
                Ok(self.client.get_leagues(&query).await?.response)
            })
            .await
    }

    /// Metadata for a single competition.
    pub async fn league_details(&self, league_id: LeagueId) -> Result<League, FootballDataError> {
        let key = format!("leagueDetails:{}", league_id);
        self.cache
            .get_or_set(&key, CacheTtl::Day, false, Some(CATEGORY), || async {
                Ok(self.client.get_league(league_id).await?)
            })
            .await
    }

    /// The league table for a competition and season.
    pub async fn standings(
        &self,
        league_id: LeagueId,
        season: Season,
    ) -> Result<Vec<Standing>, FootballDataError> {
        let key = format!("leagueStandings:{}:{}", league_id, season);
        self.cache
            .get_or_set(&key, CacheTtl::Medium, false, Some(CATEGORY), || async {
                Ok(self.client.get_standings(league_id, season).await?.response)
            })
            .await
    }

    /// Every fixture of a competition's season.
    pub async fn fixtures(
        &self,
        league_id: LeagueId,
        season: Season,
    ) -> Result<Vec<Match>, FootballDataError> {
        let key = format!("leagueFixtures:{}:{}", league_id, season);
        self.cache
            .get_or_set(&key, CacheTtl::Medium, false, Some(CATEGORY), || async {
                let query = MatchQuery::default()
                    .with_league(league_id)
                    .with_season(season);
                Ok(self.client.get_matches(&query).await?.response)
            })
            .await
    }

    /// Drops every cached competition read.
    pub fn invalidate_all(&self) {
        self.cache.clear_by_category(CATEGORY);
    }

    /// Drops the standings and fixtures cached for one competition.
    pub fn invalidate_league(&self, league_id: LeagueId) {
        self.cache
            .invalidate_pattern(&format!("leagueStandings:{}:", league_id));
        self.cache
            .invalidate_pattern(&format!("leagueFixtures:{}:", league_id));
        // Terminal key: exact removal, so league 4 leaves league 40 alone.
        self.cache.clear(Some(&format!("leagueDetails:{}", league_id)));
    }
}
