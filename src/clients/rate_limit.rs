//! Rate-limit tracking from response headers.
//!
//! Every response from the API carries headers describing the store's
//! request quota window. The tracker keeps the most recent snapshot and
//! answers two questions for the executor: "should the next request wait
//! before being sent" and "how long until the current window resets".

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use reqwest::header::HeaderMap;

use crate::config::RateLimitConfig;

/// Header carrying the milliseconds until the quota window resets.
pub const HEADER_TIME_RESET_MS: &str = "X-Rate-Limit-Time-Reset-Ms";
/// Header carrying the total length of the quota window in milliseconds.
pub const HEADER_TIME_WINDOW_MS: &str = "X-Rate-Limit-Time-Window-Ms";
/// Header carrying the number of requests left in the current window.
pub const HEADER_REQUESTS_LEFT: &str = "X-Rate-Limit-Requests-Left";
/// Header carrying the total request quota for the window.
pub const HEADER_REQUESTS_QUOTA: &str = "X-Rate-Limit-Requests-Quota";

/// A point-in-time view of the store's request quota window.
///
/// Replaced wholesale each time a response is observed; fields are never
/// merged across responses.
#[derive(Clone, Copy, Debug)]
pub struct RateLimitStatus {
    /// Milliseconds until the window resets, as reported by the API.
    pub ms_to_reset: u64,
    /// The instant at which the window resets, computed when the
    /// response was observed.
    pub next_window: Instant,
    /// Total length of the quota window in milliseconds.
    pub window_size_ms: u64,
    /// Requests remaining in the current window.
    pub requests_remaining: u32,
    /// Total requests allowed per window.
    pub requests_quota: u32,
}

/// Tracks the most recent rate-limit snapshot for one client.
///
/// The snapshot lives behind a `Mutex` so concurrent requests on the
/// same client observe a consistent view. The lock is only held for
/// field reads and writes; waiting always happens outside it.
#[derive(Debug)]
pub struct RateLimitTracker {
    config: RateLimitConfig,
    status: Mutex<Option<RateLimitStatus>>,
}

impl RateLimitTracker {
    /// Creates a tracker with no snapshot yet.
    #[must_use]
    pub const fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            status: Mutex::new(None),
        }
    }

    /// Returns the policy this tracker was built with.
    #[must_use]
    pub const fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Replaces the snapshot from a response's headers.
    ///
    /// A response without a parseable reset header leaves the previous
    /// snapshot untouched; the remaining headers individually default to
    /// zero when absent.
    pub fn update(&self, headers: &HeaderMap) {
        let Some(ms_to_reset) = header_number::<u64>(headers, HEADER_TIME_RESET_MS) else {
            return;
        };

        let status = RateLimitStatus {
            ms_to_reset,
            next_window: Instant::now() + Duration::from_millis(ms_to_reset),
            window_size_ms: header_number(headers, HEADER_TIME_WINDOW_MS).unwrap_or(0),
            requests_remaining: header_number(headers, HEADER_REQUESTS_LEFT).unwrap_or(0),
            requests_quota: header_number(headers, HEADER_REQUESTS_QUOTA).unwrap_or(0),
        };

        *self.lock() = Some(status);
    }

    /// Returns how long the next request should wait before being sent,
    /// or `None` when it may go out immediately.
    ///
    /// A wait is only requested when a snapshot exists, waiting is
    /// enabled, the remaining-request count is at or below the
    /// configured threshold, and the window reset is still in the
    /// future.
    #[must_use]
    pub fn should_wait(&self) -> Option<Duration> {
        if !self.config.enable_wait {
            return None;
        }

        let guard = self.lock();
        let status = guard.as_ref()?;
        if status.requests_remaining > self.config.min_requests_remaining {
            return None;
        }

        status
            .next_window
            .checked_duration_since(Instant::now())
            .filter(|wait| !wait.is_zero())
    }

    /// Returns the wait derived from the latest snapshot's
    /// milliseconds-to-reset, used when the store answers 429.
    #[must_use]
    pub fn reset_delay(&self) -> Option<Duration> {
        self.lock()
            .as_ref()
            .map(|status| Duration::from_millis(status.ms_to_reset))
    }

    /// Returns a copy of the current snapshot, if any response has been
    /// observed yet.
    #[must_use]
    pub fn snapshot(&self) -> Option<RateLimitStatus> {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<RateLimitStatus>> {
        // A poisoned lock only means another thread panicked mid-write;
        // the snapshot is a plain Copy value, so carry on with it.
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(reset: &str, window: &str, left: &str, quota: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            "x-rate-limit-time-reset-ms",
            HeaderValue::from_str(reset).unwrap(),
        );
        map.insert(
            "x-rate-limit-time-window-ms",
            HeaderValue::from_str(window).unwrap(),
        );
        map.insert(
            "x-rate-limit-requests-left",
            HeaderValue::from_str(left).unwrap(),
        );
        map.insert(
            "x-rate-limit-requests-quota",
            HeaderValue::from_str(quota).unwrap(),
        );
        map
    }

    #[test]
    fn test_update_parses_all_headers() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        let before = Instant::now();
        tracker.update(&headers("30000", "60000", "140", "150"));

        let status = tracker.snapshot().unwrap();
        assert_eq!(status.ms_to_reset, 30_000);
        assert_eq!(status.window_size_ms, 60_000);
        assert_eq!(status.requests_remaining, 140);
        assert_eq!(status.requests_quota, 150);

        // next_window should land ms_to_reset after the update, give or
        // take scheduling noise.
        let expected = before + Duration::from_millis(30_000);
        let skew = if status.next_window > expected {
            status.next_window - expected
        } else {
            expected - status.next_window
        };
        assert!(skew < Duration::from_millis(500), "skew was {skew:?}");
    }

    #[test]
    fn test_update_without_reset_header_is_a_noop() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        tracker.update(&headers("30000", "60000", "10", "150"));

        tracker.update(&HeaderMap::new());

        let status = tracker.snapshot().unwrap();
        assert_eq!(status.ms_to_reset, 30_000);
        assert_eq!(status.requests_remaining, 10);
    }

    #[test]
    fn test_update_with_unparseable_reset_header_is_a_noop() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        let mut map = HeaderMap::new();
        map.insert(
            "x-rate-limit-time-reset-ms",
            HeaderValue::from_static("soon"),
        );
        tracker.update(&map);
        assert!(tracker.snapshot().is_none());
    }

    #[test]
    fn test_missing_secondary_headers_default_to_zero() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        let mut map = HeaderMap::new();
        map.insert(
            "x-rate-limit-time-reset-ms",
            HeaderValue::from_static("15000"),
        );
        tracker.update(&map);

        let status = tracker.snapshot().unwrap();
        assert_eq!(status.window_size_ms, 0);
        assert_eq!(status.requests_remaining, 0);
        assert_eq!(status.requests_quota, 0);
    }

    #[test]
    fn test_should_wait_requires_low_remaining() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        tracker.update(&headers("30000", "60000", "100", "150"));
        assert!(tracker.should_wait().is_none());

        tracker.update(&headers("30000", "60000", "2", "150"));
        let wait = tracker.should_wait().unwrap();
        assert!(wait <= Duration::from_millis(30_000));
        assert!(wait > Duration::from_millis(29_000));
    }

    #[test]
    fn test_should_wait_disabled_never_waits() {
        let tracker = RateLimitTracker::new(RateLimitConfig {
            enable_wait: false,
            ..RateLimitConfig::default()
        });
        tracker.update(&headers("30000", "60000", "0", "150"));
        assert!(tracker.should_wait().is_none());
    }

    #[test]
    fn test_should_wait_without_snapshot_is_none() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        assert!(tracker.should_wait().is_none());
    }

    #[test]
    fn test_should_wait_elapsed_window_is_none() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        tracker.update(&headers("0", "60000", "0", "150"));
        assert!(tracker.should_wait().is_none());
    }

    #[test]
    fn test_reset_delay_tracks_latest_snapshot() {
        let tracker = RateLimitTracker::new(RateLimitConfig::default());
        assert!(tracker.reset_delay().is_none());

        tracker.update(&headers("12000", "60000", "140", "150"));
        assert_eq!(tracker.reset_delay(), Some(Duration::from_millis(12_000)));

        tracker.update(&headers("500", "60000", "139", "150"));
        assert_eq!(tracker.reset_delay(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_concurrent_updates_leave_one_consistent_snapshot() {
        let tracker = std::sync::Arc::new(RateLimitTracker::new(RateLimitConfig::default()));

        std::thread::scope(|scope| {
            for i in 0u32..8 {
                let tracker = std::sync::Arc::clone(&tracker);
                scope.spawn(move || {
                    for _ in 0..100 {
                        let left = (i + 1) * 10;
                        let quota = left + 50;
                        tracker.update(&headers(
                            &format!("{}", (u64::from(i) + 1) * 1000),
                            "60000",
                            &left.to_string(),
                            &quota.to_string(),
                        ));
                    }
                });
            }
        });

        // Whichever writer landed last, the snapshot must be one
        // writer's values, never a blend of two.
        let status = tracker.snapshot().unwrap();
        assert_eq!(status.requests_quota, status.requests_remaining + 50);
        assert_eq!(
            u64::from(status.requests_remaining / 10) * 1000,
            status.ms_to_reset
        );
    }
}
