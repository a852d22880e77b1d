//! HMAC-SHA256 signing utilities.
//!
//! Both bearer tokens and stored password hashes are built on the same
//! keyed-hash primitive.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a message with the given secret, returning the hex-encoded tag
pub fn sign(secret: &str, message: &str) -> Result<String, String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| format!("Invalid secret key: {e}"))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check a hex-encoded signature against a message
///
/// The comparison is constant-time. A signature that is not valid hex is
/// reported as a mismatch, not an error.
pub fn verify(secret: &str, message: &str, signature: &str) -> Result<bool, String> {
    let signature_bytes = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => return Ok(false),
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| format!("Invalid secret key: {e}"))?;
    mac.update(message.as_bytes());

    Ok(mac.verify_slice(&signature_bytes).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let signature = sign("secret", "hello").unwrap();
        assert!(verify("secret", "hello", &signature).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_message() {
        let signature = sign("secret", "hello").unwrap();
        assert!(!verify("secret", "goodbye", &signature).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let signature = sign("secret", "hello").unwrap();
        assert!(!verify("other-secret", "hello", &signature).unwrap());
    }

    #[test]
    fn verify_rejects_non_hex_signature() {
        assert!(!verify("secret", "hello", "not-hex!").unwrap());
    }
}
