//! Rate limiting configuration.

/// Configuration for per-client rate limiting
#[derive(Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    pub max_requests: usize,
    /// Window length in seconds
    pub period_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 100,
            period_seconds: 60,
        }
    }
}

impl RateLimitConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            max_requests: super::env_parse("RATE_LIMIT_RPM", 100),
            period_seconds: super::env_parse("RATE_LIMIT_PERIOD", 60),
        }
    }
}
