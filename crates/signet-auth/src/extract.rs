//! Locating candidate tokens in a request.
//!
//! Extraction only finds a string; it performs no trust decisions. The
//! candidate still has to pass [`TokenProvider::validate`](crate::TokenProvider::validate).

/// Conventional cookie name for access tokens.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Conventional cookie name for refresh tokens.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

const BEARER_PREFIX: &str = "Bearer ";

/// Pull a candidate token out of a request.
///
/// Cookies win: the first cookie (in the order given) whose name equals
/// `kind` is returned. Otherwise the `Authorization` header is consulted:
/// a `Bearer ` prefix (case-sensitive, single trailing space) is stripped,
/// and any other header value is returned unmodified. An absent header
/// yields `None`.
pub fn extract_token<'r>(
    cookies: &[(&'r str, &'r str)],
    authorization: Option<&'r str>,
    kind: &str,
) -> Option<&'r str> {
    for &(name, value) in cookies {
        if name == kind {
            return Some(value);
        }
    }

    let header = authorization?;
    Some(header.strip_prefix(BEARER_PREFIX).unwrap_or(header))
}

/// Split a `Cookie:` header line into ordered name/value pairs.
///
/// Segments without an `=` are skipped.
pub fn parse_cookie_header(header: &str) -> Vec<(&str, &str)> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .collect()
}
