//! Error types.

use signet_api::IdentityError;
use thiserror::Error;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Token is malformed, unsigned by our key, or otherwise untrusted.
    /// Callers must treat this as uninformative about the specific cause.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token parsed and verified but lacks a claim the caller needs.
    #[error("token is missing the {0} claim")]
    MissingClaim(&'static str),

    /// Startup configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The identity store has no record for the token's subject. Surfaced
    /// distinctly from token failures so transports can answer with an
    /// authentication error rather than a generic fault.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Token encoder error.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
