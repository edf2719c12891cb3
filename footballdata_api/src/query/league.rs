use url::Url;

use super::{common::QueryCommon, Query};

/// Query builder for the `/leagues` endpoint.
#[derive(Default)]
pub struct LeagueQuery {
    pub common: QueryCommon,
    /// Filter by country name (e.g. `England`).
    pub country: Option<String>,
    /// Free-text name search.
    pub search: Option<String>,
    /// Restrict to competitions with a season currently in play.
    pub current_only: bool,
}

impl Query for LeagueQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(country) = &self.country {
            url.query_pairs_mut()
                .append_pair("country", country.as_str());
        }
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if self.current_only {
            url.query_pairs_mut().append_pair("current", "true");
        }
        url
    }
}

impl LeagueQuery {
    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn current_only(mut self) -> Self {
        self.current_only = true;
        self
    }
}
