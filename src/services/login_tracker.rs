//! Failed login tracking.

use std::{
    collections::HashMap,
    env,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

/// Tracks failed login attempts by client IP address
///
/// Repeated failures inside the configured window mark a client as
/// suspicious, which the login handler turns into an audit event.
pub struct FailedLoginTracker {
    failures: Arc<Mutex<HashMap<String, (usize, Instant)>>>,
    max_failures: usize,
    window_seconds: u64,
}

impl Default for FailedLoginTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FailedLoginTracker {
    /// Create a new tracker with environment-based configuration
    pub fn new() -> Self {
        let max_failures = env::var("AUTH_MAX_FAILURES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let window_seconds = env::var("AUTH_FAILURE_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300); // 5 minutes

        Self {
            failures: Arc::new(Mutex::new(HashMap::new())),
            max_failures,
            window_seconds,
        }
    }

    /// Record a failed login attempt for the given IP
    ///
    /// Returns `true` once the IP crosses the suspicious threshold.
    pub fn record_failure(&self, ip: &str) -> bool {
        let mut failures = self.failures.lock().unwrap();
        let now = Instant::now();
        let window = Duration::from_secs(self.window_seconds);

        failures.retain(|_, (_, first)| now.duration_since(*first) < window);

        let entry = failures.entry(ip.to_string()).or_insert((0, now));
        if now.duration_since(entry.1) >= window {
            *entry = (0, now);
        }
        entry.0 += 1;

        entry.0 >= self.max_failures
    }

    /// Check whether the given IP is currently flagged as suspicious
    pub fn is_suspicious(&self, ip: &str) -> bool {
        let failures = self.failures.lock().unwrap();
        if let Some((count, first)) = failures.get(ip) {
            let window = Duration::from_secs(self.window_seconds);
            if Instant::now().duration_since(*first) < window {
                return *count >= self.max_failures;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(max_failures: usize) -> FailedLoginTracker {
        FailedLoginTracker {
            failures: Arc::new(Mutex::new(HashMap::new())),
            max_failures,
            window_seconds: 300,
        }
    }

    #[test]
    fn threshold_marks_the_client_suspicious() {
        let tracker = tracker(3);

        assert!(!tracker.record_failure("10.0.0.1"));
        assert!(!tracker.record_failure("10.0.0.1"));
        assert!(tracker.record_failure("10.0.0.1"));
        assert!(tracker.is_suspicious("10.0.0.1"));
    }

    #[test]
    fn other_clients_stay_clean() {
        let tracker = tracker(2);

        tracker.record_failure("10.0.0.1");
        tracker.record_failure("10.0.0.1");

        assert!(tracker.is_suspicious("10.0.0.1"));
        assert!(!tracker.is_suspicious("10.0.0.2"));
    }
}
