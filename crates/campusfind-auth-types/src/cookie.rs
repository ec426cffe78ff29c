//! Session cookie builder.
//!
//! Cookie name and lifetime match the legacy system (`authToken`, 1 day).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::token::SESSION_TTL_SECS;

/// Cookie name for the session token.
pub const AUTH_TOKEN_COOKIE: &str = "authToken";

/// Set the session-token cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use campusfind_auth_types::cookie::{set_session_cookie, AUTH_TOKEN_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "token_value".to_string());
/// let cookie = jar.get(AUTH_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(86_400)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String) -> CookieJar {
    let cookie = Cookie::build((AUTH_TOKEN_COOKIE, value))
        .path("/")
        .max_age(Duration::seconds(SESSION_TTL_SECS as i64))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use campusfind_auth_types::cookie::{clear_session_cookie, set_session_cookie, AUTH_TOKEN_COOKIE};
///
/// let jar = set_session_cookie(CookieJar::new(), "a".to_string());
/// let jar = clear_session_cookie(jar);
/// let cookie = jar.get(AUTH_TOKEN_COOKIE).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    let cookie = Cookie::build((AUTH_TOKEN_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
