//! Startup configuration.

use serde::Deserialize;

/// Token subsystem configuration. All fields are process-wide constants:
/// they are read once when the [`TokenProvider`](crate::TokenProvider) is
/// constructed and never change afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Signing secret. Base64-encoded once at startup to derive the HMAC
    /// key material; must not be empty.
    pub secret: String,

    /// Issuer written into every token, access and refresh alike.
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Access token lifetime in seconds.
    #[serde(default = "default_access_ttl_secs")]
    pub access_ttl_secs: u64,

    /// Refresh token lifetime in seconds.
    #[serde(default = "default_refresh_ttl_secs")]
    pub refresh_ttl_secs: u64,
}

impl AuthConfig {
    /// Config with the given secret and default issuer and lifetimes.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: default_issuer(),
            access_ttl_secs: default_access_ttl_secs(),
            refresh_ttl_secs: default_refresh_ttl_secs(),
        }
    }
}

fn default_issuer() -> String {
    "signet".to_string()
}

fn default_access_ttl_secs() -> u64 {
    60 * 60
}

fn default_refresh_ttl_secs() -> u64 {
    60 * 60 * 24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: AuthConfig =
            serde_json::from_value(serde_json::json!({ "secret": "change-me" })).unwrap();

        assert_eq!(config.issuer, "signet");
        assert_eq!(config.access_ttl_secs, 3_600);
        assert_eq!(config.refresh_ttl_secs, 86_400);
    }

    #[test]
    fn explicit_fields_win() {
        let config: AuthConfig = serde_json::from_value(serde_json::json!({
            "secret": "change-me",
            "issuer": "gateway",
            "access_ttl_secs": 120,
        }))
        .unwrap();

        assert_eq!(config.issuer, "gateway");
        assert_eq!(config.access_ttl_secs, 120);
        assert_eq!(config.refresh_ttl_secs, 86_400);
    }
}
