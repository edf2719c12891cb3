use std::sync::Arc;

use footballdata_lib::cache::{CacheStore, ExpiryScheduler};
use footballdata_lib::ttl::CacheTtl;
use footballdata_lib::{
    Client, FootballDataError, LeaguesService, MatchesService, TeamsService,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn matches_body() -> serde_json::Value {
    json!({
        "results": 1,
        "response": [{
            "matchId": 12345,
            "leagueId": 39,
            "season": 2025,
            "kickoff": "2025-08-30T16:30:00Z",
            "status": "LIVE",
            "minute": 57,
            "venue": "Anfield",
            "home": { "teamId": 40, "name": "Liverpool", "goals": 2 },
            "away": { "teamId": 42, "name": "Arsenal", "goals": 1 }
        }]
    })
}

fn standings_body() -> serde_json::Value {
    json!({
        "results": 1,
        "response": [{
            "rank": 1,
            "teamId": 40,
            "teamName": "Liverpool",
            "played": 3,
            "won": 3,
            "drawn": 0,
            "lost": 0,
            "goalsFor": 9,
            "goalsAgainst": 2,
            "goalDifference": 7,
            "points": 9,
            "form": "WWW"
        }]
    })
}

fn test_parts(server: &MockServer) -> (Arc<Client>, Arc<CacheStore>) {
    let client = Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap();
    (Arc::new(client), Arc::new(CacheStore::new()))
}

#[tokio::test]
async fn repeated_service_calls_hit_the_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matches"))
        .and(query_param("live", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(matches_body()))
        .expect(1)
        .mount(&server)
        .await;

    let (client, cache) = test_parts(&server);
    let matches = MatchesService::new(client, Arc::clone(&cache));

    let first = matches.live_matches(Some(39)).await.unwrap();
    let second = matches.live_matches(Some(39)).await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second[0].match_id, first[0].match_id);
    assert_eq!(cache.stats().categories.get("match"), Some(&1));
}

#[tokio::test]
async fn different_query_shapes_get_distinct_keys() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/matches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(matches_body()))
        .expect(2)
        .mount(&server)
        .await;

    let (client, cache) = test_parts(&server);
    let matches = MatchesService::new(client, Arc::clone(&cache));

    matches.live_matches(Some(39)).await.unwrap();
    matches.live_matches(None).await.unwrap();

    assert_eq!(cache.stats().size, 2);
}

#[tokio::test]
async fn stale_entry_survives_upstream_outage() {
    let server = MockServer::start().await;

    // First request succeeds, everything after that is a 500.
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standings_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    // A scheduler that never fires keeps expired entries around for the
    // stale-fallback path, like a timer that has not gotten to run yet.
    struct NeverExpiry;
    impl ExpiryScheduler for NeverExpiry {
        fn schedule(&self, _delay: std::time::Duration, _task: Box<dyn FnOnce() + Send + 'static>) {
        }
    }

    let client =
        Arc::new(Client::with_base_url(&server.uri(), "test-key".to_string()).unwrap());
    let cache = Arc::new(CacheStore::with_parts(NeverExpiry, || false));

    // A zero-minute TTL expires immediately, forcing a refetch per call.
    let fetch = |cache: &Arc<CacheStore>, client: &Arc<Client>| {
        let cache = Arc::clone(cache);
        let client = Arc::clone(client);
        async move {
            cache
                .get_or_set(
                    "leagueStandings:39:2025",
                    CacheTtl::Minutes(0),
                    false,
                    Some("league"),
                    || async { Ok(client.get_standings(39, 2025).await?.response) },
                )
                .await
        }
    };

    let fresh = fetch(&cache, &client).await.unwrap();
    assert_eq!(fresh[0].points, 9);

    // Upstream is now failing; the expired entry is served instead.
    let stale = fetch(&cache, &client).await.unwrap();
    assert_eq!(stale[0].team_name, "Liverpool");
}

#[tokio::test]
async fn error_propagates_when_nothing_is_cached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (client, cache) = test_parts(&server);
    let leagues = LeaguesService::new(client, cache);

    let result = leagues.standings(39, 2025).await;
    assert!(matches!(
        result,
        Err(FootballDataError::Api(
            footballdata_api::Error::HttpStatus { status: 500, .. }
        ))
    ));
}

#[tokio::test]
async fn upstream_rate_limit_is_visible_to_callers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/40"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "42")
                .set_body_string("too many requests"),
        )
        .mount(&server)
        .await;

    let (client, cache) = test_parts(&server);
    let teams = TeamsService::new(client, cache);

    let result = teams.team_details(40).await;
    match result {
        Err(FootballDataError::Api(footballdata_api::Error::RateLimited {
            retry_after_secs,
        })) => assert_eq!(retry_after_secs, Some(42)),
        other => panic!("expected RateLimited, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn search_normalizes_and_validates_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(query_param("search", "liverpool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": 1,
            "response": [{
                "teamId": 40,
                "name": "Liverpool",
                "country": "England",
                "founded": 1892,
                "venue": "Anfield",
                "logo": null
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, cache) = test_parts(&server);
    let teams = TeamsService::new(client, cache);

    // Differently-cased spellings share one cache entry.
    let first = teams.search("  Liverpool ").await.unwrap();
    let second = teams.search("LIVERPOOL").await.unwrap();
    assert_eq!(first[0].team_id, second[0].team_id);

    assert!(matches!(
        teams.search("   ").await,
        Err(FootballDataError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn invalidating_one_team_leaves_prefix_sharing_ids_alone() {
    let server = MockServer::start().await;

    fn team_body(id: i64) -> serde_json::Value {
        json!({
            "response": {
                "teamId": id,
                "name": format!("Team {}", id),
                "country": "England",
                "founded": 1900,
                "venue": null,
                "logo": null
            }
        })
    }
    let squad_body = json!({
        "results": 1,
        "response": [{
            "playerId": 1,
            "name": "Player One",
            "position": "Midfielder",
            "number": 8,
            "age": 25
        }]
    });

    for id in [4, 40] {
        Mock::given(method("GET"))
            .and(path(format!("/teams/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(team_body(id)))
            .mount(&server)
            .await;
    }
    for id in [4, 400] {
        Mock::given(method("GET"))
            .and(path(format!("/teams/{}/squad", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(squad_body.clone()))
            .mount(&server)
            .await;
    }

    let (client, cache) = test_parts(&server);
    let teams = TeamsService::new(client, Arc::clone(&cache));

    teams.team_details(4).await.unwrap();
    teams.team_details(40).await.unwrap();
    teams.squad(4).await.unwrap();
    teams.squad(400).await.unwrap();
    assert_eq!(cache.stats().size, 4);

    // "4" is a prefix of "40" and "400"; only team 4's entries may go.
    teams.invalidate_team(4);

    let stats = cache.stats();
    assert_eq!(stats.size, 2);
    assert_eq!(stats.categories.get("team"), Some(&1));
    assert_eq!(stats.categories.get("squad"), Some(&1));
}

#[tokio::test]
async fn team_invalidation_clears_squad_too() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "teamId": 40,
                "name": "Liverpool",
                "country": "England",
                "founded": 1892,
                "venue": "Anfield",
                "logo": null
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teams/40/squad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": 1,
            "response": [{
                "playerId": 306,
                "name": "Mohamed Salah",
                "position": "Attacker",
                "number": 11,
                "age": 33
            }]
        })))
        .mount(&server)
        .await;

    let (client, cache) = test_parts(&server);
    let teams = TeamsService::new(client, Arc::clone(&cache));

    teams.team_details(40).await.unwrap();
    teams.squad(40).await.unwrap();
    assert_eq!(cache.stats().size, 2);

    teams.invalidate_all();
    assert_eq!(cache.stats().size, 0);
}
