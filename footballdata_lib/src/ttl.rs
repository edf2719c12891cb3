//! TTL classes and the match-hours freshness adjustment.
//!
//! Frequently-changing resources (live scores, today's fixtures) get shorter
//! cache lifetimes while football is actually being played: weekends, or
//! weekday evenings 17:00-23:59 UTC.

use std::time::Duration;

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};

/// Lower bound on an adjusted TTL, so peak-time shortening never thrashes.
const MATCH_HOURS_FLOOR: Duration = Duration::from_secs(60);

/// Divisor applied to Short/Standard TTLs during match hours.
const MATCH_HOURS_DIVISOR: u32 = 3;

/// Time-to-live for a cache entry: a named volatility class or a raw
/// minute count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTtl {
    /// 5 minutes. Live scores and other rapidly changing data.
    Short,
    /// 30 minutes. Near-term fixtures.
    Standard,
    /// 2 hours. Season and historical data.
    Medium,
    /// 12 hours. Team metadata and squads.
    Long,
    /// 24 hours. Competition metadata.
    Day,
    /// Explicit minute count. Never adjusted for match hours.
    Minutes(u64),
}

impl CacheTtl {
    /// The unadjusted duration for this class.
    pub fn base(self) -> Duration {
        let minutes = match self {
            CacheTtl::Short => 5,
            CacheTtl::Standard => 30,
            CacheTtl::Medium => 120,
            CacheTtl::Long => 720,
            CacheTtl::Day => 1440,
            CacheTtl::Minutes(m) => m,
        };
        Duration::from_secs(minutes * 60)
    }

    /// Effective duration after the match-hours adjustment.
    ///
    /// Only `Short` and `Standard` tighten during match hours; the longer
    /// classes back semi-static resources and keep their base duration, as
    /// does an explicit `Minutes` value.
    pub fn effective(self, adjust_for_match_hours: bool, match_hours_active: bool) -> Duration {
        let base = self.base();
        let adjustable = matches!(self, CacheTtl::Short | CacheTtl::Standard);
        if adjust_for_match_hours && match_hours_active && adjustable {
            std::cmp::max(MATCH_HOURS_FLOOR, base / MATCH_HOURS_DIVISOR)
        } else {
            base
        }
    }
}

/// Whether football is likely in progress right now (UTC).
pub fn is_match_hours() -> bool {
    match_hours_at(Utc::now())
}

fn match_hours_at(now: DateTime<Utc>) -> bool {
    let weekend = matches!(now.weekday(), Weekday::Sat | Weekday::Sun);
    weekend || (17..=23).contains(&now.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 30, 0).unwrap()
    }

    #[test]
    fn base_durations() {
        assert_eq!(CacheTtl::Short.base(), Duration::from_secs(5 * 60));
        assert_eq!(CacheTtl::Standard.base(), Duration::from_secs(30 * 60));
        assert_eq!(CacheTtl::Medium.base(), Duration::from_secs(120 * 60));
        assert_eq!(CacheTtl::Long.base(), Duration::from_secs(720 * 60));
        assert_eq!(CacheTtl::Day.base(), Duration::from_secs(1440 * 60));
        assert_eq!(CacheTtl::Minutes(7).base(), Duration::from_secs(7 * 60));
    }

    #[test]
    fn short_shrinks_to_a_third_during_match_hours() {
        // 5min / 3 = 100s, above the 60s floor
        assert_eq!(
            CacheTtl::Short.effective(true, true),
            Duration::from_secs(100)
        );
        assert_eq!(
            CacheTtl::Standard.effective(true, true),
            Duration::from_secs(600)
        );
    }

    #[test]
    fn no_adjustment_outside_match_hours() {
        assert_eq!(
            CacheTtl::Short.effective(true, false),
            Duration::from_secs(300)
        );
    }

    #[test]
    fn no_adjustment_when_not_requested() {
        assert_eq!(
            CacheTtl::Short.effective(false, true),
            Duration::from_secs(300)
        );
    }

    #[test]
    fn long_classes_never_adjust() {
        assert_eq!(CacheTtl::Medium.effective(true, true), CacheTtl::Medium.base());
        assert_eq!(CacheTtl::Long.effective(true, true), CacheTtl::Long.base());
        assert_eq!(CacheTtl::Day.effective(true, true), CacheTtl::Day.base());
    }

    #[test]
    fn raw_minutes_bypass_adjustment() {
        assert_eq!(
            CacheTtl::Minutes(10).effective(true, true),
            Duration::from_secs(600)
        );
    }

    #[test]
    fn weekends_are_match_hours() {
        // Saturday morning
        assert!(match_hours_at(utc(2025, 8, 30, 9)));
        // Sunday evening
        assert!(match_hours_at(utc(2025, 8, 31, 20)));
    }

    #[test]
    fn weekday_evenings_are_match_hours() {
        // Wednesday 17:30 UTC
        assert!(match_hours_at(utc(2025, 9, 3, 17)));
        // Wednesday 23:30 UTC
        assert!(match_hours_at(utc(2025, 9, 3, 23)));
    }

    #[test]
    fn weekday_daytime_is_not_match_hours() {
        // Wednesday 10:30 UTC
        assert!(!match_hours_at(utc(2025, 9, 3, 10)));
        // Wednesday 00:30 UTC
        assert!(!match_hours_at(utc(2025, 9, 3, 0)));
        // Wednesday 16:30 UTC, just before the window opens
        assert!(!match_hours_at(utc(2025, 9, 3, 16)));
    }
}
