//! Fixed-window rate limiter keyed by caller-supplied tokens (IP addresses,
//! emails, ...).
//!
//! Each token gets a counting window of `interval`; `check` increments the
//! window's count on every call, accepted or not. A background sweep running
//! every `interval` drops stale windows and bounds the number of distinct
//! tokens held. Because the sweep period equals the window, a bucket can
//! survive up to twice the interval before collection.

use std::sync::{Arc, Weak};
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

/// Rejection produced when a token exceeds its per-window limit.
///
/// Deliberately separate from the data-path error enum: callers (e.g. a
/// login handler) translate this into a 429 response, never into a fetch
/// failure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Too many requests, retry in {retry_after_secs}s")]
pub struct RateLimitExceeded {
    /// HTTP status this maps to. Always 429.
    pub status: u16,
    /// Whole seconds until the token's window resets, rounded up.
    pub retry_after_secs: u64,
}

struct Bucket {
    window_start: Instant,
    count: u64,
}

/// Per-token fixed-window counter.
pub struct RateLimiter {
    buckets: Arc<DashMap<String, Bucket>>,
    interval: Duration,
    unique_token_per_interval: usize,
}

impl RateLimiter {
    /// Creates a limiter and starts its background sweep task. Must be called
    /// from within a Tokio runtime.
    pub fn new(interval: Duration, unique_token_per_interval: usize) -> Self {
        let buckets: Arc<DashMap<String, Bucket>> = Arc::new(DashMap::new());
        spawn_sweep(
            Arc::downgrade(&buckets),
            interval,
            unique_token_per_interval,
        );
        Self {
            buckets,
            interval,
            unique_token_per_interval,
        }
    }

    /// Records an attempt for `token` and decides whether it is allowed.
    ///
    /// The bucket is created on first sight and restarted once its window has
    /// elapsed. The count includes rejected attempts, so hammering a locked
    /// token does not shorten its wait.
    pub fn check(&self, limit: u64, token: &str) -> Result<(), RateLimitExceeded> {
        let now = Instant::now();
        let mut bucket = self
            .buckets
            .entry(token.to_string())
            .or_insert_with(|| Bucket {
                window_start: now,
                count: 0,
            });

        if now.duration_since(bucket.window_start) >= self.interval {
            bucket.window_start = now;
            bucket.count = 0;
        }

        bucket.count += 1;
        if bucket.count <= limit {
            Ok(())
        } else {
            let resets_in = (bucket.window_start + self.interval).duration_since(now);
            let retry_after_secs = resets_in.as_secs_f64().ceil() as u64;
            Err(RateLimitExceeded {
                status: 429,
                retry_after_secs,
            })
        }
    }

    /// Drops the bucket for `token` immediately, regardless of window state.
    /// Used after a successful login to clear the counter.
    pub fn reset(&self, token: &str) {
        self.buckets.remove(token);
    }

    /// One sweep pass: GC windows older than the interval, then evict
    /// oldest-window buckets until the unique-token bound holds.
    pub fn sweep(&self) {
        sweep_once(&self.buckets, self.interval, self.unique_token_per_interval);
    }

    /// Number of distinct tokens currently tracked.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn spawn_sweep(buckets: Weak<DashMap<String, Bucket>>, interval: Duration, max_tokens: usize) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            match buckets.upgrade() {
                Some(buckets) => sweep_once(&buckets, interval, max_tokens),
                // Limiter dropped; the sweep dies with it.
                None => break,
            }
        }
    });
}

fn sweep_once(buckets: &DashMap<String, Bucket>, interval: Duration, max_tokens: usize) {
    let now = Instant::now();
    buckets.retain(|_, bucket| now.duration_since(bucket.window_start) < interval);

    while buckets.len() > max_tokens {
        let oldest = buckets
            .iter()
            .min_by_key(|entry| entry.window_start)
            .map(|entry| entry.key().clone());
        match oldest {
            Some(key) => {
                buckets.remove(&key);
            }
            None => break,
        }
    }
}
