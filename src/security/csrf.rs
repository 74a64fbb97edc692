//! Double-submit anti-forgery token: the token travels once as a cookie and
//! once as a request header, and both must match.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const CSRF_COOKIE: &str = "csrf_token";
pub const CSRF_HEADER: &str = "x-csrf-token";

pub fn issue_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub fn token_cookie(token: String) -> Cookie<'static> {
    Cookie::build((CSRF_COOKIE, token))
        .path("/")
        .same_site(SameSite::Strict)
        .build()
}

/// The existing token if the jar has one, otherwise a freshly issued token.
pub fn current_or_new(jar: &CookieJar) -> String {
    jar.get(CSRF_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(issue_token)
}

pub fn verify(jar: &CookieJar, headers: &HeaderMap) -> bool {
    let cookie = jar.get(CSRF_COOKIE).map(|c| c.value());
    let header = headers.get(CSRF_HEADER).and_then(|v| v.to_str().ok());

    match (cookie, header) {
        (Some(c), Some(h)) => !c.is_empty() && c == h,
        _ => false,
    }
}
