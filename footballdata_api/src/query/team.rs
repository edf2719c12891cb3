use url::Url;

use crate::types::{LeagueId, Season};

use super::{common::QueryCommon, Query};

/// Query builder for the `/teams` endpoint.
#[derive(Default)]
pub struct TeamQuery {
    pub common: QueryCommon,
    pub league_id: Option<LeagueId>,
    pub season: Option<Season>,
    pub country: Option<String>,
    /// Free-text name search.
    pub search: Option<String>,
}

impl Query for TeamQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(league_id) = self.league_id {
            url.query_pairs_mut()
                .append_pair("league", &league_id.to_string());
        }
        if let Some(season) = self.season {
            url.query_pairs_mut()
                .append_pair("season", &season.to_string());
        }
        if let Some(country) = &self.country {
            url.query_pairs_mut()
                .append_pair("country", country.as_str());
        }
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        url
    }
}

impl TeamQuery {
    pub fn with_league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}
