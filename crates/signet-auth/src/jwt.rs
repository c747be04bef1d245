//! Token issuance and verification.

use crate::claims::{now_epoch_secs, AccessClaims, RefreshClaims};
use crate::config::AuthConfig;
use crate::key::SigningKey;
use crate::{Error, Result};

use jsonwebtoken::{Algorithm, Header, Validation};
use serde_json::Value;
use signet_api::{Identity, IdentityResolver, ResolvedIdentity};
use std::collections::HashSet;
use tracing::debug;

/// Issues, verifies, and interprets signed claims tokens.
///
/// Construct one at startup and share it across request handlers; the
/// signing key inside is immutable for the process lifetime.
pub struct TokenProvider {
    key: SigningKey,
    issuer: String,
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
}

/// An authenticated principal assembled from a verified token.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The resolved identity and its granted authorities.
    pub principal: ResolvedIdentity,

    /// Always empty: a verified token carries no reusable secret.
    pub credentials: String,
}

/// Why a token was rejected. Logged for observability only — callers of
/// [`TokenProvider::validate`] see the collapsed boolean and nothing else,
/// so the reason can never influence an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Malformed,
    BadSignature,
    Expired,
}

impl TokenProvider {
    /// Build a provider from startup configuration.
    ///
    /// Fails if the configured secret is empty.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        Ok(Self {
            key: SigningKey::derive(&config.secret)?,
            issuer: config.issuer.clone(),
            access_ttl_secs: config.access_ttl_secs,
            refresh_ttl_secs: config.refresh_ttl_secs,
        })
    }

    /// Issue a short-lived access token carrying the identity's claims.
    ///
    /// Issuing twice for the same identity at the same instant produces
    /// byte-identical tokens.
    pub fn issue_access_token(&self, identity: &Identity) -> Result<String> {
        self.issue_access_token_at(identity, now_epoch_secs())
    }

    fn issue_access_token_at(&self, identity: &Identity, issued_at: i64) -> Result<String> {
        let claims =
            AccessClaims::for_identity(identity, &self.issuer, issued_at, self.access_ttl_secs);
        let token = jsonwebtoken::encode(&Header::default(), &claims, self.key.encoding())?;
        debug!(subject = %claims.sub, exp = claims.exp, "issued access token");
        Ok(token)
    }

    /// Issue a long-lived refresh token.
    ///
    /// The payload carries no identity — only issuer, issued-at, and
    /// expiration. It proves that this client authenticated before, nothing
    /// more, and is deliberately not bound to any access token or device.
    pub fn issue_refresh_token(&self) -> Result<String> {
        self.issue_refresh_token_at(now_epoch_secs())
    }

    fn issue_refresh_token_at(&self, issued_at: i64) -> Result<String> {
        let claims = RefreshClaims::new(&self.issuer, issued_at, self.refresh_ttl_secs);
        let token = jsonwebtoken::encode(&Header::default(), &claims, self.key.encoding())?;
        debug!(exp = claims.exp, "issued refresh token");
        Ok(token)
    }

    /// Check that a candidate token is trusted: well-formed, signed by our
    /// key, and not past its expiration.
    ///
    /// Every failure collapses to `false`; the cause is logged at debug
    /// level and never surfaced. Pure — no side effects beyond that log.
    pub fn validate(&self, token: &str) -> bool {
        match self.check_at(token, now_epoch_secs()) {
            Ok(_) => true,
            Err(reason) => {
                debug!(?reason, "rejected token");
                false
            }
        }
    }

    fn check_at(&self, token: &str, now: i64) -> std::result::Result<Value, Rejection> {
        let claims = self.decode(token).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => Rejection::BadSignature,
            _ => Rejection::Malformed,
        })?;

        let exp = claims
            .get("exp")
            .and_then(Value::as_i64)
            .ok_or(Rejection::Malformed)?;

        // Inclusive boundary: a token at its exact expiration instant is
        // still valid.
        if exp < now {
            return Err(Rejection::Expired);
        }

        Ok(claims)
    }

    /// Return the `email` claim of a token.
    ///
    /// The signature is re-verified as part of the parse; expiration is
    /// not checked. Callers that care about expiry must call
    /// [`validate`](Self::validate) first.
    pub fn subject_email(&self, token: &str) -> Result<String> {
        let claims = self
            .decode(token)
            .map_err(|e| Error::InvalidToken(e.to_string()))?;

        claims
            .get("email")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(Error::MissingClaim("email"))
    }

    /// Resolve a token's subject through the identity store and assemble
    /// an authenticated principal.
    ///
    /// Fails with [`Error::Identity`] when the store has no matching
    /// record — distinct from any token failure.
    pub fn authentication_context(
        &self,
        token: &str,
        resolver: &dyn IdentityResolver,
    ) -> Result<AuthContext> {
        let email = self.subject_email(token)?;
        let principal = resolver.lookup(&email)?;
        debug!(email = %email, "assembled authentication context");

        Ok(AuthContext {
            principal,
            credentials: String::new(),
        })
    }

    fn decode(&self, token: &str) -> std::result::Result<Value, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<Value>(token, self.key.decoding(), &validation())?;
        Ok(data.claims)
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked manually so the boundary stays inclusive and
    // subject_email can skip it.
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();
    validation
}
