//! Login throttling: a per-IP rate limit and an independent per-email
//! account lockout.
//!
//! The two mechanisms are separate state machines with different keys,
//! windows, and thresholds. The IP limit rejects bursts from one address;
//! the lockout slows password guessing against one account regardless of
//! source address. They are composed, never merged.

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

use crate::rate_limit::{RateLimitExceeded, RateLimiter};

/// Login attempts allowed per IP per minute.
const IP_ATTEMPTS_PER_WINDOW: u64 = 5;
const IP_WINDOW: Duration = Duration::from_secs(60);
/// Bound on distinct IPs tracked between sweeps.
const IP_UNIQUE_TOKENS: usize = 500;

/// Failed attempts before an account locks.
const LOCKOUT_THRESHOLD: u64 = 10;
const LOCKOUT_WINDOW: Duration = Duration::from_secs(15 * 60);

struct FailedAttempts {
    count: u64,
    since: Instant,
}

/// Failed-login tracker keyed by normalized email.
///
/// An account locks once `threshold` failures accumulate inside `window`;
/// the counter restarts when the window elapses and clears on successful
/// login.
pub struct LoginLockout {
    attempts: DashMap<String, FailedAttempts>,
    threshold: u64,
    window: Duration,
}

impl LoginLockout {
    pub fn new(threshold: u64, window: Duration) -> Self {
        Self {
            attempts: DashMap::new(),
            threshold,
            window,
        }
    }

    /// Records a failed login and returns the updated failure count.
    pub fn record_failure(&self, email: &str) -> u64 {
        let key = normalize_email(email);
        let now = Instant::now();
        let mut entry = self.attempts.entry(key).or_insert_with(|| FailedAttempts {
            count: 0,
            since: now,
        });
        if now.duration_since(entry.since) >= self.window {
            entry.count = 0;
            entry.since = now;
        }
        entry.count += 1;
        entry.count
    }

    /// Time left on an active lockout for `email`, or `None` when the
    /// account is not locked.
    pub fn remaining(&self, email: &str) -> Option<Duration> {
        let key = normalize_email(email);
        let now = Instant::now();

        let expired = match self.attempts.get(&key) {
            None => return None,
            Some(entry) => {
                let elapsed = now.duration_since(entry.since);
                if elapsed >= self.window {
                    true
                } else if entry.count >= self.threshold {
                    return Some(self.window - elapsed);
                } else {
                    return None;
                }
            }
        };

        if expired {
            self.attempts.remove(&key);
        }
        None
    }

    /// Forgets all failures for `email` (successful login).
    pub fn clear(&self, email: &str) {
        self.attempts.remove(&normalize_email(email));
    }
}

/// Preflight checks for the login path, composing the IP rate limit with the
/// email lockout. Owns both state machines; inject one instance from the
/// application's composition root rather than using globals.
pub struct LoginGuard {
    ip_limiter: RateLimiter,
    lockout: LoginLockout,
}

impl Default for LoginGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginGuard {
    /// Creates a guard with the standard thresholds (5 attempts/min per IP,
    /// 10 failures / 15 min lockout per email). Must be called from within a
    /// Tokio runtime.
    pub fn new() -> Self {
        Self {
            ip_limiter: RateLimiter::new(IP_WINDOW, IP_UNIQUE_TOKENS),
            lockout: LoginLockout::new(LOCKOUT_THRESHOLD, LOCKOUT_WINDOW),
        }
    }

    /// IP-level throttle. A rejection here is a 429-style control signal.
    pub fn check_ip(&self, ip: &str) -> Result<(), RateLimitExceeded> {
        self.ip_limiter.check(IP_ATTEMPTS_PER_WINDOW, ip)
    }

    /// Remaining lockout for the account, reported as a value so the caller
    /// can render a "try again in N minutes" failure result.
    pub fn lockout_remaining(&self, email: &str) -> Option<Duration> {
        self.lockout.remaining(email)
    }

    /// Records a failed password check; returns the account's failure count.
    pub fn record_failure(&self, email: &str) -> u64 {
        self.lockout.record_failure(email)
    }

    /// Clears both throttles after a successful login.
    pub fn record_success(&self, ip: &str, email: &str) {
        self.lockout.clear(email);
        self.ip_limiter.reset(ip);
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
