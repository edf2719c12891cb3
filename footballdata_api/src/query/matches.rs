use chrono::NaiveDate;
use url::Url;

use crate::types::{LeagueId, MatchStatus, Season, TeamId};

use super::{common::QueryCommon, Query};

/// Query builder for the `/matches` endpoint.
#[derive(Default)]
pub struct MatchQuery {
    pub common: QueryCommon,
    pub league_id: Option<LeagueId>,
    pub season: Option<Season>,
    pub team_id: Option<TeamId>,
    /// Restrict to matches currently in play.
    pub live: bool,
    /// Restrict to a single calendar day (UTC).
    pub date: Option<NaiveDate>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Restrict to fixtures kicking off within the next N days.
    pub next_days: Option<i64>,
    pub statuses: Vec<MatchStatus>,
}

impl Query for MatchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if self.live {
            url.query_pairs_mut().append_pair("live", "all");
        }
        if let Some(league_id) = self.league_id {
            url.query_pairs_mut()
                .append_pair("league", &league_id.to_string());
        }
        if let Some(season) = self.season {
            url.query_pairs_mut()
                .append_pair("season", &season.to_string());
        }
        if let Some(team_id) = self.team_id {
            url.query_pairs_mut()
                .append_pair("team", &team_id.to_string());
        }
        if let Some(date) = self.date {
            url.query_pairs_mut()
                .append_pair("date", &date.format("%Y-%m-%d").to_string());
        }
        if let Some(from) = self.date_from {
            url.query_pairs_mut()
                .append_pair("from", &from.format("%Y-%m-%d").to_string());
        }
        if let Some(to) = self.date_to {
            url.query_pairs_mut()
                .append_pair("to", &to.format("%Y-%m-%d").to_string());
        }
        if let Some(next_days) = self.next_days {
            url.query_pairs_mut()
                .append_pair("next", &next_days.to_string());
        }
        for status in self.statuses.iter() {
            url.query_pairs_mut()
                .append_pair("status", &status.to_string());
        }
        url
    }
}

impl MatchQuery {
    pub fn live(mut self) -> Self {
        self.live = true;
        self
    }

    pub fn with_league(mut self, league_id: LeagueId) -> Self {
        self.league_id = Some(league_id);
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn with_next_days(mut self, next_days: i64) -> Self {
        self.next_days = Some(next_days);
        self
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.statuses.push(status);
        self
    }
}
