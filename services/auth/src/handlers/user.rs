use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use campusfind_auth_types::session::Session;

use crate::domain::types::{ProfileUpdate, User};
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::profile::{
    GetUserUseCase, UpdateAccountInput, UpdateAccountUseCase, UpdateProfileUseCase,
};

/// Profile returned to the client. Never includes the password hash.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    pub section: Option<String>,
    pub role: u8,
    pub verified: bool,
    #[serde(serialize_with = "campusfind_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "campusfind_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            course: user.course,
            year: user.year,
            section: user.section,
            role: user.role,
            verified: user.verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── GET /api/users/me ────────────────────────────────────────────────────────

pub async fn get_me(
    session: Session,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AuthServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(session.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PUT /api/users/profile ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub course: Option<String>,
    pub year: Option<String>,
    pub section: Option<String>,
}

pub async fn update_profile(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AuthServiceError> {
    let usecase = UpdateProfileUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(
            session.user_id,
            ProfileUpdate {
                name: body.name,
                phone: body.phone,
                course: body.course,
                year: body.year,
                section: body.section,
            },
        )
        .await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PUT /api/users/account ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub new_email: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub async fn update_account(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<Json<UserResponse>, AuthServiceError> {
    let usecase = UpdateAccountUseCase {
        repo: state.user_repo(),
        email_domain: state.email_domain.clone(),
    };
    let user = usecase
        .execute(
            session.user_id,
            UpdateAccountInput {
                new_email: body.new_email,
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await?;
    Ok(Json(UserResponse::from(user)))
}
