//! Cookie helpers for delivering issued tokens.

use crate::extract::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::{Error, Result};
use httpdate::fmt_http_date;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// SameSite attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    /// SameSite=Strict
    Strict,
    /// SameSite=Lax
    Lax,
    /// SameSite=None
    None,
}

impl SameSite {
    fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Options used to build a token cookie.
#[derive(Debug, Clone)]
pub struct CookieOptions {
    /// Cookie name. Keep it equal to the token kind used at extraction.
    pub name: String,

    /// Cookie path.
    pub path: String,

    /// Optional cookie domain.
    pub domain: Option<String>,

    /// Send on HTTPS only.
    pub secure: bool,

    /// Not accessible to JS.
    pub http_only: bool,

    /// SameSite attribute.
    pub same_site: SameSite,

    /// Max-Age in seconds. For token cookies this should match the token
    /// lifetime so the browser drops the cookie with the token.
    pub max_age_seconds: Option<u64>,

    /// If true and `domain` is None, the cookie name will be prefixed with
    /// `__Host-` and the function will enforce `path=/` and `secure=true`.
    /// The extractor matches bare kind names, so callers opting in must
    /// extract with the prefixed name too.
    pub use_host_prefix: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            name: ACCESS_TOKEN_COOKIE.to_string(),
            path: "/".to_string(),
            domain: None,
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            max_age_seconds: None,
            use_host_prefix: false,
        }
    }
}

/// Options for an access-token cookie living as long as the token does.
pub fn access_cookie(ttl_secs: u64) -> CookieOptions {
    CookieOptions {
        name: ACCESS_TOKEN_COOKIE.to_string(),
        max_age_seconds: Some(ttl_secs),
        ..CookieOptions::default()
    }
}

/// Options for a refresh-token cookie living as long as the token does.
pub fn refresh_cookie(ttl_secs: u64) -> CookieOptions {
    CookieOptions {
        name: REFRESH_TOKEN_COOKIE.to_string(),
        max_age_seconds: Some(ttl_secs),
        ..CookieOptions::default()
    }
}

fn cookie_name(opts: &CookieOptions) -> Result<String> {
    if opts.use_host_prefix && opts.domain.is_none() {
        // Enforce __Host- cookie requirements.
        if opts.path != "/" {
            return Err(Error::Config(
                "__Host- cookies must have Path=/".to_string(),
            ));
        }
        if !opts.secure {
            return Err(Error::Config("__Host- cookies must be Secure".to_string()));
        }
        Ok(format!("__Host-{}", opts.name.trim_start_matches("__Host-")))
    } else {
        Ok(opts.name.clone())
    }
}

/// Build a `Set-Cookie` header value carrying a token.
pub fn build_set_cookie(value: &str, opts: &CookieOptions) -> Result<String> {
    let name = cookie_name(opts)?;

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!("{name}={value}"));
    parts.push(format!("Path={}", opts.path));

    if let Some(domain) = &opts.domain {
        parts.push(format!("Domain={domain}"));
    }

    if opts.secure {
        parts.push("Secure".to_string());
    }
    if opts.http_only {
        parts.push("HttpOnly".to_string());
    }

    parts.push(format!("SameSite={}", opts.same_site.as_str()));

    if let Some(max_age) = opts.max_age_seconds {
        parts.push(format!("Max-Age={max_age}"));
        // Expires for older clients.
        let expires = SystemTime::now() + Duration::from_secs(max_age);
        parts.push(format!("Expires={}", fmt_http_date(expires)));
    }

    Ok(parts.join("; "))
}

/// Build a `Set-Cookie` header value that clears the cookie, e.g. on
/// logout.
pub fn build_clear_cookie(opts: &CookieOptions) -> Result<String> {
    let name = cookie_name(opts)?;

    let mut parts: Vec<String> = Vec::new();
    parts.push(format!("{name}="));
    parts.push(format!("Path={}", opts.path));

    if let Some(domain) = &opts.domain {
        parts.push(format!("Domain={domain}"));
    }

    if opts.secure {
        parts.push("Secure".to_string());
    }
    if opts.http_only {
        parts.push("HttpOnly".to_string());
    }

    parts.push(format!("SameSite={}", opts.same_site.as_str()));
    parts.push("Max-Age=0".to_string());
    parts.push(format!("Expires={}", fmt_http_date(UNIX_EPOCH)));

    Ok(parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_cookie_is_named_after_the_kind() {
        let sc = build_set_cookie("abc", &access_cookie(3_600)).unwrap();
        assert!(sc.starts_with("access_token=abc"));
        assert!(sc.contains("Max-Age=3600"));
        assert!(sc.contains("Expires="));
        assert!(sc.contains("HttpOnly"));
    }

    #[test]
    fn refresh_cookie_is_named_after_the_kind() {
        let sc = build_set_cookie("def", &refresh_cookie(86_400)).unwrap();
        assert!(sc.starts_with("refresh_token=def"));
        assert!(sc.contains("Max-Age=86400"));
    }

    #[test]
    fn host_prefix_renames_and_enforces() {
        let opts = CookieOptions {
            use_host_prefix: true,
            ..CookieOptions::default()
        };
        let sc = build_set_cookie("abc", &opts).unwrap();
        assert!(sc.starts_with("__Host-access_token=abc"));

        let insecure = CookieOptions {
            use_host_prefix: true,
            secure: false,
            ..CookieOptions::default()
        };
        assert!(build_set_cookie("abc", &insecure).is_err());

        let scoped = CookieOptions {
            use_host_prefix: true,
            path: "/api".to_string(),
            ..CookieOptions::default()
        };
        assert!(build_set_cookie("abc", &scoped).is_err());
    }

    #[test]
    fn clear_cookie_has_max_age_zero() {
        let sc = build_clear_cookie(&access_cookie(3_600)).unwrap();
        assert!(sc.starts_with("access_token="));
        assert!(sc.contains("Max-Age=0"));
    }
}
