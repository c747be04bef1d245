//! signet-auth
//!
//! Stateless token authentication for HTTP services. It covers the three
//! steps a request goes through:
//!
//! - **Issuing signed claims tokens** (short-lived access tokens carrying
//!   identity claims, long-lived identity-free refresh tokens)
//! - **Locating a candidate token** in a request (named cookie first, then
//!   the `Authorization` header)
//! - **Verifying** signature and expiration before the request proceeds
//!
//! Tokens are standard three-segment HMAC-SHA-256 JWTs, so any compliant
//! parser can read them. The signing key is derived once at startup and is
//! immutable for the process lifetime; the core holds no per-session state.
//! Turning a verified token's subject into a full identity goes through the
//! [`signet_api::IdentityResolver`] capability, so the store technology
//! stays swappable.
//!
//! ## Quick start
//! ```
//! use signet_auth::{AuthConfig, TokenProvider, extract_token, ACCESS_TOKEN_COOKIE};
//!
//! # fn demo() -> signet_auth::Result<()> {
//! let provider = TokenProvider::new(&AuthConfig::new("change-me"))?;
//!
//! let identity = signet_api::Identity {
//!     id: 1,
//!     name: "Jiwoo".to_string(),
//!     email: "jiwoo@example.com".to_string(),
//!     role: "SUPPORTER".to_string(),
//!     phone_number: None,
//! };
//! let token = provider.issue_access_token(&identity)?;
//!
//! let cookies = [(ACCESS_TOKEN_COOKIE, token.as_str())];
//! let candidate = extract_token(&cookies, None, ACCESS_TOKEN_COOKIE);
//! assert!(provider.validate(candidate.unwrap_or_default()));
//! # Ok(()) }
//! ```

#![forbid(unsafe_code)]

mod claims;
mod config;
mod cookie;
mod error;
mod extract;
mod jwt;
mod key;

pub use claims::{AccessClaims, RefreshClaims, PHONE_NUMBER_PLACEHOLDER};
pub use config::AuthConfig;
pub use cookie::{
    access_cookie, build_clear_cookie, build_set_cookie, refresh_cookie, CookieOptions, SameSite,
};
pub use error::{Error, Result};
pub use extract::{extract_token, parse_cookie_header, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
pub use jwt::{AuthContext, TokenProvider};
pub use key::SigningKey;
