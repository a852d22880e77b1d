//! Token issuance, validation, and password hashing.
//!
//! Tokens are self-contained: `{user_id}.{issued_at}.{signature}` where
//! the signature is an HMAC-SHA256 over `{issued_at}.{user_id}` with the
//! server secret. Validation checks the signature first, then the issue
//! timestamp against the configured TTL.

use crate::{config::TokenConfig, models::User, utils::hmac};
use actix_web::HttpRequest;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Errors produced by token and credential checks
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("malformed token")]
    MalformedToken,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("signing failed: {0}")]
    Signing(String),
}

fn unix_now() -> Result<u64, AuthError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| AuthError::Signing(format!("system time error: {e}")))
}

/// Issue a signed bearer token for the given user
pub fn issue_token(config: &TokenConfig, user_id: &str) -> Result<String, AuthError> {
    let issued_at = unix_now()?;
    let signature = hmac::sign(&config.secret, &format!("{issued_at}.{user_id}"))
        .map_err(AuthError::Signing)?;

    Ok(format!("{user_id}.{issued_at}.{signature}"))
}

/// Validate a token and return the user ID it was issued for
pub fn validate_token(config: &TokenConfig, token: &str) -> Result<String, AuthError> {
    let mut parts = token.splitn(3, '.');
    let (Some(user_id), Some(issued_at), Some(signature)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::MalformedToken);
    };
    let issued_at: u64 = issued_at.parse().map_err(|_| AuthError::MalformedToken)?;

    let message = format!("{issued_at}.{user_id}");
    if !hmac::verify(&config.secret, &message, signature).map_err(AuthError::Signing)? {
        return Err(AuthError::InvalidSignature);
    }

    if unix_now()?.abs_diff(issued_at) > config.ttl_seconds {
        return Err(AuthError::Expired);
    }

    Ok(user_id.to_string())
}

/// Extract and validate the bearer token on a request
///
/// Returns the authenticated user ID.
pub fn authenticate(req: &HttpRequest, config: &TokenConfig) -> Result<String, AuthError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    validate_token(config, token)
}

/// Generate a fresh per-user password salt
pub fn generate_salt() -> String {
    Uuid::new_v4().to_string()
}

/// Hash a password with the server secret and a per-user salt
pub fn hash_password(
    config: &TokenConfig,
    salt: &str,
    password: &str,
) -> Result<String, AuthError> {
    hmac::sign(&config.secret, &format!("{salt}.{password}")).map_err(AuthError::Signing)
}

/// Check a password attempt against a stored credential in constant time
pub fn verify_password(config: &TokenConfig, user: &User, password: &str) -> bool {
    hmac::verify(
        &config.secret,
        &format!("{}.{}", user.password_salt, password),
        &user.password_hash,
    )
    .unwrap_or(false)
}
