//! Per-client request rate limiting.

use crate::{
    config::RateLimitConfig,
    models::{AuthAuditEvent, AuthEventOutcome, AuthEventType},
    utils::http::extract_client_ip,
};
use actix_web::{HttpRequest, HttpResponse};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

/// Simple in-memory rate limiter
///
/// Tracks request counts per client key in fixed windows and rejects
/// requests once the configured budget for the current window is spent.
#[derive(Clone)]
pub struct SimpleRateLimiter {
    config: RateLimitConfig,
    windows: Arc<Mutex<HashMap<String, (usize, Instant)>>>,
}

impl SimpleRateLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Check if the given key (typically an IP address) has budget left
    ///
    /// Returns `true` if the request should be allowed.
    pub fn check_rate_limit(&self, key: &str) -> bool {
        let mut windows = self.windows.lock().unwrap();
        let now = Instant::now();
        let period = Duration::from_secs(self.config.period_seconds);

        // Drop windows that have already expired.
        windows.retain(|_, (_, started)| now.duration_since(*started) < period);

        let entry = windows.entry(key.to_string()).or_insert((0, now));
        if now.duration_since(entry.1) >= period {
            *entry = (0, now);
        }

        if entry.0 >= self.config.max_requests {
            return false;
        }

        entry.0 += 1;
        true
    }
}

/// Function-based rate limiting middleware
///
/// Checks the requesting client against the limiter and returns a 429
/// response when the limit is exceeded.
pub fn rate_limit_middleware(
    req: &HttpRequest,
    limiter: &SimpleRateLimiter,
) -> Result<(), HttpResponse> {
    let ip = extract_client_ip(req);

    if !limiter.check_rate_limit(&ip) {
        AuthAuditEvent::new(
            AuthEventType::RateLimitExceeded,
            AuthEventOutcome::Failure,
            ip,
            req.method().to_string(),
            req.uri().path().to_string(),
        )
        .log();

        return Err(HttpResponse::TooManyRequests().json(serde_json::json!({
            "error": "Too Many Requests",
            "message": "Rate limit exceeded. Please try again later."
        })));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_over_the_budget_are_rejected() {
        let limiter = SimpleRateLimiter::new(RateLimitConfig {
            max_requests: 3,
            period_seconds: 60,
        });

        for _ in 0..3 {
            assert!(limiter.check_rate_limit("10.0.0.1"));
        }
        assert!(!limiter.check_rate_limit("10.0.0.1"));
    }

    #[test]
    fn clients_are_limited_independently() {
        let limiter = SimpleRateLimiter::new(RateLimitConfig {
            max_requests: 1,
            period_seconds: 60,
        });

        assert!(limiter.check_rate_limit("10.0.0.1"));
        assert!(!limiter.check_rate_limit("10.0.0.1"));
        assert!(limiter.check_rate_limit("10.0.0.2"));
    }
}
