//! Claim shapes for the two token kinds.

use serde::{Deserialize, Serialize};
use signet_api::Identity;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Value written to the `phoneNumber` claim when the identity has no phone
/// number on record. The key is always present so downstream parsers never
/// have to branch on its existence.
pub const PHONE_NUMBER_PLACEHOLDER: &str = "NoNumber";

/// Payload of an access token. Serialized in declaration order, so two
/// tokens issued for the same identity at the same instant are
/// byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject, set to the identity's display name.
    pub sub: String,

    /// Stable identity id.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Contact email. This is the unique key the resolver looks up.
    pub email: String,

    /// Role label, as the identity store defines it.
    pub role: String,

    /// Phone number, or [`PHONE_NUMBER_PLACEHOLDER`] when absent.
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,

    /// Issuer.
    pub iss: String,

    /// Issued-at, epoch seconds.
    pub iat: i64,

    /// Expiration, epoch seconds. Always `iat` + the access lifetime.
    pub exp: i64,
}

impl AccessClaims {
    pub(crate) fn for_identity(
        identity: &Identity,
        issuer: &str,
        issued_at: i64,
        ttl_secs: u64,
    ) -> Self {
        Self {
            sub: identity.name.clone(),
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role.clone(),
            phone_number: identity
                .phone_number
                .clone()
                .unwrap_or_else(|| PHONE_NUMBER_PLACEHOLDER.to_string()),
            iss: issuer.to_string(),
            iat: issued_at,
            exp: issued_at + ttl_secs as i64,
        }
    }
}

/// Payload of a refresh token: no identity, only proof that this client
/// authenticated before. Not bound to any access token or device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Issuer.
    pub iss: String,

    /// Issued-at, epoch seconds.
    pub iat: i64,

    /// Expiration, epoch seconds. Always `iat` + the refresh lifetime.
    pub exp: i64,
}

impl RefreshClaims {
    pub(crate) fn new(issuer: &str, issued_at: i64, ttl_secs: u64) -> Self {
        Self {
            iss: issuer.to_string(),
            iat: issued_at,
            exp: issued_at + ttl_secs as i64,
        }
    }
}

pub(crate) fn now_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_secs() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(phone: Option<&str>) -> Identity {
        Identity {
            id: 11,
            name: "Jiwoo".to_string(),
            email: "jiwoo@example.com".to_string(),
            role: "SUPPORTER".to_string(),
            phone_number: phone.map(str::to_owned),
        }
    }

    #[test]
    fn missing_phone_gets_placeholder() {
        let claims = AccessClaims::for_identity(&identity(None), "signet", 1_000, 3_600);
        assert_eq!(claims.phone_number, PHONE_NUMBER_PLACEHOLDER);
    }

    #[test]
    fn present_phone_is_kept() {
        let claims =
            AccessClaims::for_identity(&identity(Some("010-1234-5678")), "signet", 1_000, 3_600);
        assert_eq!(claims.phone_number, "010-1234-5678");
    }

    #[test]
    fn subject_is_the_display_name() {
        let claims = AccessClaims::for_identity(&identity(None), "signet", 1_000, 3_600);
        assert_eq!(claims.sub, "Jiwoo");
    }

    #[test]
    fn expiry_is_issued_at_plus_lifetime() {
        let claims = AccessClaims::for_identity(&identity(None), "signet", 1_000, 3_600);
        assert_eq!(claims.exp, 4_600);

        let refresh = RefreshClaims::new("signet", 1_000, 86_400);
        assert_eq!(refresh.exp, 87_400);
    }

    #[test]
    fn phone_claim_uses_wire_name() {
        let claims = AccessClaims::for_identity(&identity(None), "signet", 1_000, 3_600);
        let value = serde_json::to_value(&claims).unwrap();
        assert!(value.get("phoneNumber").is_some());
        assert!(value.get("phone_number").is_none());
    }
}
