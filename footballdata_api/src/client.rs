//! HTTP client for the upstream football-data API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{LeagueQuery, MatchQuery, Query, TeamQuery},
    types::{ApiItem, ApiResponse, League, LeagueId, Match, MatchId, Player, Season, Standing, Team, TeamId},
    Error,
};

/// Request timeout for upstream API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the football-data API.
///
/// Authenticates with an API key header. Response bodies are deserialized
/// through the [`ApiResponse`]/[`ApiItem`] envelopes.
pub struct Client {
    client: reqwest::Client,
    api_key: String,
    /// Base URL for the API. Defaults to `https://api.footballdata.example`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url("https://api.footballdata.example", api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            client,
            api_key,
            base_api_url: base_url.to_string(),
        })
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let resp = self
            .client
            .get(url)
            .header("x-apisports-key", &self.api_key)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::InvalidApiKey);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            tracing::warn!(?retry_after_secs, "Upstream API rate limit hit");
            return Err(Error::RateLimited { retry_after_secs });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches fixtures matching the given query.
    pub async fn get_matches(&self, query: &MatchQuery) -> Result<ApiResponse<Match>, Error> {
        self.get::<ApiResponse<Match>, MatchQuery>("/matches", Some(query))
            .await
    }

    /// Fetches a single match by its numeric ID.
    pub async fn get_match(&self, match_id: MatchId) -> Result<Match, Error> {
        let item = self
            .get::<ApiItem<Match>, MatchQuery>(format!("/matches/{}", match_id).as_str(), None)
            .await?;
        Ok(item.response)
    }

    /// Fetches competitions matching the given query.
    pub async fn get_leagues(&self, query: &LeagueQuery) -> Result<ApiResponse<League>, Error> {
        self.get::<ApiResponse<League>, LeagueQuery>("/leagues", Some(query))
            .await
    }

    /// Fetches a single competition by its numeric ID.
    pub async fn get_league(&self, league_id: LeagueId) -> Result<League, Error> {
        let item = self
            .get::<ApiItem<League>, LeagueQuery>(format!("/leagues/{}", league_id).as_str(), None)
            .await?;
        Ok(item.response)
    }

    /// Fetches the league table for a competition and season.
    pub async fn get_standings(
        &self,
        league_id: LeagueId,
        season: Season,
    ) -> Result<ApiResponse<Standing>, Error> {
        self.get::<ApiResponse<Standing>, LeagueQuery>(
            format!("/standings?league={}&season={}", league_id, season).as_str(),
            None,
        )
        .await
    }

    /// Fetches teams matching the given query.
    pub async fn get_teams(&self, query: &TeamQuery) -> Result<ApiResponse<Team>, Error> {
        self.get::<ApiResponse<Team>, TeamQuery>("/teams", Some(query))
            .await
    }

    /// Fetches a single team by its numeric ID.
    pub async fn get_team(&self, team_id: TeamId) -> Result<Team, Error> {
        let item = self
            .get::<ApiItem<Team>, TeamQuery>(format!("/teams/{}", team_id).as_str(), None)
            .await?;
        Ok(item.response)
    }

    /// Fetches the current squad for a team.
    pub async fn get_squad(&self, team_id: TeamId) -> Result<ApiResponse<Player>, Error> {
        self.get::<ApiResponse<Player>, TeamQuery>(
            format!("/teams/{}/squad", team_id).as_str(),
            None,
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
