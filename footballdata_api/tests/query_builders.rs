use chrono::NaiveDate;
use footballdata_api::{LeagueQuery, MatchQuery, Query, TeamQuery};
use url::Url;

fn base() -> Url {
    Url::parse("https://api.footballdata.example/matches").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn match_query_defaults_to_page_one() {
    let url = MatchQuery::default().add_to_url(&base());
    let pairs = pairs(&url);
    assert_eq!(pairs, vec![("page".to_string(), "1".to_string())]);
}

#[test]
fn match_query_live_filter() {
    let url = MatchQuery::default().live().with_league(39).add_to_url(&base());
    let pairs = pairs(&url);
    assert!(pairs.contains(&("live".to_string(), "all".to_string())));
    assert!(pairs.contains(&("league".to_string(), "39".to_string())));
}

#[test]
fn match_query_date_formats_iso() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    let url = MatchQuery::default().with_date(date).add_to_url(&base());
    assert!(pairs(&url).contains(&("date".to_string(), "2025-08-30".to_string())));
}

#[test]
fn match_query_upcoming_window() {
    let url = MatchQuery::default()
        .with_next_days(7)
        .with_season(2025)
        .with_team(40)
        .add_to_url(&base());
    let pairs = pairs(&url);
    assert!(pairs.contains(&("next".to_string(), "7".to_string())));
    assert!(pairs.contains(&("season".to_string(), "2025".to_string())));
    assert!(pairs.contains(&("team".to_string(), "40".to_string())));
}

#[test]
fn match_query_date_range() {
    let from = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
    let url = MatchQuery::default().with_date_range(from, to).add_to_url(&base());
    let pairs = pairs(&url);
    assert!(pairs.contains(&("from".to_string(), "2025-08-01".to_string())));
    assert!(pairs.contains(&("to".to_string(), "2025-08-31".to_string())));
}

#[test]
fn league_query_filters() {
    let url = LeagueQuery::default()
        .with_country("England")
        .current_only()
        .add_to_url(&base());
    let pairs = pairs(&url);
    assert!(pairs.contains(&("country".to_string(), "England".to_string())));
    assert!(pairs.contains(&("current".to_string(), "true".to_string())));
}

#[test]
fn team_query_search_and_pagination() {
    let url = TeamQuery::default()
        .with_search("united")
        .with_page(2)
        .with_page_size(50)
        .add_to_url(&base());
    let pairs = pairs(&url);
    assert!(pairs.contains(&("search".to_string(), "united".to_string())));
    assert!(pairs.contains(&("page".to_string(), "2".to_string())));
    assert!(pairs.contains(&("pageSize".to_string(), "50".to_string())));
}
