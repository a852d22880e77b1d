//! Bearer token signing configuration.

use std::env;

/// Configuration for token signing, validation, and password hashing
#[derive(Clone)]
pub struct TokenConfig {
    /// Shared secret for HMAC-SHA256 signing
    pub secret: String,
    /// How long an issued token stays valid, in seconds
    pub ttl_seconds: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "default-secret-key".to_string(),
            ttl_seconds: 3600, // 1 hour
        }
    }
}

impl TokenConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let secret =
            env::var("TOKEN_SECRET").unwrap_or_else(|_| "default-secret-key".to_string());
        let ttl_seconds = super::env_parse("TOKEN_TTL_SECONDS", 3600);

        Self {
            secret,
            ttl_seconds,
        }
    }
}
