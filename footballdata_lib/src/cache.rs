//! In-memory request cache with TTL'd entries, stale-on-error fallback, and
//! pattern/category invalidation, backed by `DashMap`.
//!
//! Values are stored as serialized JSON strings; `get_or_set` is generic over
//! any `Serialize + DeserializeOwned` payload. Concurrent `get_or_set` calls
//! for the same key are not coalesced: both invoke their fetch closure and
//! the last write wins. Callers needing at-most-once fetches must add their
//! own in-flight map.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::Instant;

use crate::error::FootballDataError;
use crate::ttl::{is_match_hours, CacheTtl};

/// A single cached value with its expiry metadata.
pub struct StoredEntry {
    json: String,
    category: Option<String>,
    created_at: Instant,
    ttl: Duration,
    generation: u64,
}

impl StoredEntry {
    fn is_live(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) < self.ttl
    }
}

/// Deferred-task abstraction for entry self-expiry, so tests can swap the
/// wall-clock timer for a manual one.
///
/// Entry validity never depends on the timer actually firing; the scheduled
/// removal is housekeeping. A task firing after its entry was cleared or
/// replaced must be a no-op, which [`CacheStore`] guarantees with a
/// per-insertion generation check.
pub trait ExpiryScheduler: Send + Sync {
    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
}

impl<S: ExpiryScheduler + ?Sized> ExpiryScheduler for Arc<S> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        (**self).schedule(delay, task)
    }
}

/// Default scheduler: a detached Tokio task that sleeps and fires.
pub struct TokioExpiry;

impl ExpiryScheduler for TokioExpiry {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

/// Snapshot of cache occupancy for observability.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub size: usize,
    /// Entry count per category label. Untagged entries are not counted here.
    pub categories: HashMap<String, usize>,
}

/// Thread-safe request cache with per-entry TTL.
///
/// The effective TTL is fixed at insertion time (after the match-hours
/// adjustment); later policy changes never affect stored entries.
pub struct CacheStore {
    entries: Arc<DashMap<String, StoredEntry>>,
    scheduler: Box<dyn ExpiryScheduler>,
    match_hours: Box<dyn Fn() -> bool + Send + Sync>,
    generation: AtomicU64,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    /// Creates a store with the Tokio expiry scheduler and the real UTC
    /// match-hours clock.
    pub fn new() -> Self {
        Self::with_parts(TokioExpiry, is_match_hours)
    }

    /// Creates a store with a custom expiry scheduler and match-hours source.
    /// Used for testing with a manual scheduler or forced match hours.
    pub fn with_parts(
        scheduler: impl ExpiryScheduler + 'static,
        match_hours: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            scheduler: Box::new(scheduler),
            match_hours: Box::new(match_hours),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the cached value for `key`, or fetches, stores, and returns a
    /// fresh one.
    ///
    /// On a fetch failure, an expired entry still present for `key` is served
    /// as stale data instead of propagating the error. With no previous entry
    /// the fetch error is returned unchanged.
    pub async fn get_or_set<T, F, Fut>(
        &self,
        key: &str,
        ttl: CacheTtl,
        adjust_for_match_hours: bool,
        category: Option<&str>,
        fetch: F,
    ) -> Result<T, FootballDataError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, FootballDataError>>,
    {
        let effective = ttl.effective(adjust_for_match_hours, (self.match_hours)());

        if let Some(entry) = self.entries.get(key) {
            if entry.is_live(Instant::now()) {
                return decode_cached(&entry.json);
            }
        }

        match fetch().await {
            Ok(value) => {
                let json = serde_json::to_string(&value)?;
                let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
                self.entries.insert(
                    key.to_string(),
                    StoredEntry {
                        json,
                        category: category.map(str::to_string),
                        created_at: Instant::now(),
                        ttl: effective,
                        generation,
                    },
                );
                self.schedule_removal(key.to_string(), generation, effective);
                Ok(value)
            }
            Err(err) => {
                if let Some(entry) = self.entries.get(key) {
                    tracing::warn!(key, error = %err, "fetch failed, serving stale cache entry");
                    return decode_cached(&entry.json);
                }
                Err(err)
            }
        }
    }

    fn schedule_removal(&self, key: String, generation: u64, delay: Duration) {
        let entries = Arc::downgrade(&self.entries);
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(entries) = entries.upgrade() {
                    // A refreshed entry carries a newer generation; only the
                    // entry this timer was armed for is removed.
                    entries.remove_if(&key, |_, e| e.generation == generation);
                }
            }),
        );
    }

    /// Removes one entry, or every entry when no key is given.
    pub fn clear(&self, key: Option<&str>) {
        match key {
            Some(key) => {
                self.entries.remove(key);
            }
            None => self.entries.clear(),
        }
    }

    /// Removes every entry whose key contains `pattern` (plain substring
    /// match, not a regex).
    pub fn invalidate_pattern(&self, pattern: &str) {
        self.entries.retain(|key, _| !key.contains(pattern));
    }

    /// Removes every entry tagged with `category`.
    pub fn clear_by_category(&self, category: &str) {
        self.entries
            .retain(|_, entry| entry.category.as_deref() != Some(category));
    }

    /// Current entry count and per-category breakdown.
    pub fn stats(&self) -> CacheStats {
        let mut categories: HashMap<String, usize> = HashMap::new();
        for entry in self.entries.iter() {
            if let Some(category) = &entry.category {
                *categories.entry(category.clone()).or_default() += 1;
            }
        }
        CacheStats {
            size: self.entries.len(),
            categories,
        }
    }
}

fn decode_cached<T: DeserializeOwned>(json: &str) -> Result<T, FootballDataError> {
    serde_json::from_str(json).map_err(|e| FootballDataError::Cache(e.to_string()))
}
