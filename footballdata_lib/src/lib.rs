//! Library layer for the football-data browser: TTL'd request cache,
//! rate limiting, and cached data services over the `footballdata_api` client.
//!
//! The cache favors availability over freshness: when a refresh fails and an
//! expired entry is still around, the stale value is served instead of the
//! error. Rate limiting is a separate concern with its own rejection type.

pub mod auth;
pub mod cache;
pub mod error;
pub mod rate_limit;
pub mod services;
pub mod ttl;

pub use footballdata_api;
pub use footballdata_api::types;
pub use footballdata_api::{Client, LeagueQuery, MatchQuery, Query, TeamQuery};

pub use auth::{LoginGuard, LoginLockout};
pub use cache::{CacheStats, CacheStore, ExpiryScheduler, TokioExpiry};
pub use error::FootballDataError;
pub use rate_limit::{RateLimitExceeded, RateLimiter};
pub use services::{LeaguesService, MatchesService, TeamsService};
pub use ttl::{is_match_hours, CacheTtl};
