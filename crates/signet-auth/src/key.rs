//! Signing key lifecycle.

use crate::{Error, Result};

use base64::Engine;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::fmt;

/// The process-wide symmetric signing key.
///
/// Derived exactly once at startup from the configured secret: the secret
/// string is base64-encoded and the encoded form becomes the HMAC key
/// material for both signing and verification. The key is immutable after
/// construction; every token issued and verified by a process instance uses
/// the same key.
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Derive the key from the configured secret.
    pub fn derive(secret: &str) -> Result<Self> {
        if secret.trim().is_empty() {
            return Err(Error::Config(
                "signing secret must not be empty".to_string(),
            ));
        }

        let material = base64::engine::general_purpose::STANDARD.encode(secret.as_bytes());
        Ok(Self {
            encoding: EncodingKey::from_secret(material.as_bytes()),
            decoding: DecodingKey::from_secret(material.as_bytes()),
        })
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("material", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_secret_is_rejected() {
        assert!(matches!(SigningKey::derive(""), Err(Error::Config(_))));
        assert!(matches!(SigningKey::derive("   "), Err(Error::Config(_))));
    }

    #[test]
    fn debug_redacts_material() {
        let key = SigningKey::derive("top-secret").unwrap();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("top-secret"));
    }
}
