use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::otp::{
    ResendOtpInput, ResendOtpUseCase, SendOtpInput, SendOtpUseCase, VerifyOtpInput,
    VerifyOtpUseCase,
};

#[derive(Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<Value>, AuthServiceError> {
    let usecase = SendOtpUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
        email_domain: state.email_domain.clone(),
    };
    usecase.execute(SendOtpInput { email: body.email }).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Deserialize)]
pub struct ResendOtpRequest {
    pub email: String,
}

pub async fn resend_otp(
    State(state): State<AppState>,
    Json(body): Json<ResendOtpRequest>,
) -> Result<Json<Value>, AuthServiceError> {
    let usecase = ResendOtpUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
    };
    usecase
        .execute(ResendOtpInput { email: body.email })
        .await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<Value>, AuthServiceError> {
    let usecase = VerifyOtpUseCase {
        users: state.user_repo(),
        otps: state.otp_repo(),
    };
    usecase
        .execute(VerifyOtpInput {
            email: body.email,
            code: body.otp,
        })
        .await?;
    Ok(Json(json!({ "success": true })))
}
