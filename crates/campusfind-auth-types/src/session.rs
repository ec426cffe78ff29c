//! Session extractor for protected routes.

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::CookieJar;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::AUTH_TOKEN_COOKIE;
use crate::token::validate_session_token;

/// Gives the extractor access to the JWT secret held in service state.
pub trait SessionSecret {
    fn jwt_secret(&self) -> &str;
}

/// Authenticated user identity, read from the `authToken` cookie and
/// validated against the service's JWT secret.
///
/// Returns 401 if the cookie is absent, expired, or fails validation.
/// Role enforcement (403) is done by handlers after extraction.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub role: u8,
}

impl<S> FromRequestParts<S> for Session
where
    S: SessionSecret + Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let jar = CookieJar::from_headers(&parts.headers);
        let session = jar
            .get(AUTH_TOKEN_COOKIE)
            .and_then(|cookie| validate_session_token(cookie.value(), state.jwt_secret()).ok());

        async move {
            let info = session.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id: info.user_id,
                role: info.role,
            })
        }
    }
}
