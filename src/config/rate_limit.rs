//! Rate-limit policy configuration.

/// Policy controlling how the client reacts to the store's request quota.
///
/// Supplied at client construction and shared read-only by every request
/// on that client. When omitted the default is `{ min_requests_remaining:
/// 2, enable_wait: true }`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::RateLimitConfig;
///
/// // Fail-fast mode: never sleep before a request, accept 429s and let
/// // the retry policy deal with them.
/// let config = RateLimitConfig {
///     enable_wait: false,
///     ..RateLimitConfig::default()
/// };
/// assert_eq!(config.min_requests_remaining, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Threshold of remaining requests at or below which the client will
    /// pause until the quota window resets.
    pub min_requests_remaining: u32,
    /// Whether to pause before a request when the threshold is reached.
    /// When `false` the client never waits and callers accept 429
    /// responses as a normal, retried outcome.
    pub enable_wait: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            min_requests_remaining: 2,
            enable_wait: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_policy() {
        let config = RateLimitConfig::default();
        assert_eq!(config.min_requests_remaining, 2);
        assert!(config.enable_wait);
    }
}
