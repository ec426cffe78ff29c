//! JWT session-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
use serde::Serialize;
use uuid::Uuid;

/// Session lifetime in seconds (1 day — the lifetime the legacy cookie carried).
pub const SESSION_TTL_SECS: u64 = 86_400;

/// User identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub user_id: Uuid,
    pub role: u8,
    pub expires_at: u64,
}

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionTokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload shared by token creation (auth service) and validation
/// (everything else).
///
/// `sub` is the user id as a UUID string, `role` the
/// [`campusfind_domain::user::UserRole`] wire value, `exp` seconds since the
/// UNIX epoch.
///
/// [`Deserialize`] is always available — all consumers validate tokens.
/// [`Serialize`] requires the **`USE_ONLY_IN_AUTH_SERVICE`** cargo feature;
/// only the auth service enables it because it is the sole token issuer.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test), derive(Serialize))]
pub struct SessionClaims {
    pub sub: String,
    pub role: u8,
    pub exp: u64,
}

/// Decode and validate a session JWT, returning parsed identity.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`.
/// Default leeway = 60s tolerates clock skew between hosts.
pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionInfo, SessionTokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionTokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => SessionTokenError::InvalidSignature,
        _ => SessionTokenError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| SessionTokenError::Malformed)?;

    Ok(SessionInfo {
        user_id,
        role: data.claims.role,
        expires_at: data.claims.exp,
    })
}
