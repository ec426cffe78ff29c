use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use campusfind_auth_types::cookie::{clear_session_cookie, set_session_cookie};

use crate::error::AuthServiceError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::register::{RegisterInput, RegisterUseCase};
use crate::usecase::session::{LoginInput, LoginUseCase};

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(alias = "fullName")]
    pub name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<StatusCode, AuthServiceError> {
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
        email_domain: state.email_domain.clone(),
    };
    usecase
        .execute(RegisterInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<UserResponse>), AuthServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    let jar = set_session_cookie(jar, output.token);
    Ok((jar, Json(UserResponse::from(output.user))))
}

// ── POST /api/auth/logout ────────────────────────────────────────────────────

pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (clear_session_cookie(jar), StatusCode::NO_CONTENT)
}
