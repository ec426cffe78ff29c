use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("user already registered")]
    UserAlreadyExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("only institutional emails are allowed")]
    NonInstitutionalEmail,
    #[error("email already verified")]
    AlreadyVerified,
    #[error("otp expired or invalid")]
    InvalidOtp,
    #[error("too many attempts")]
    TooManyOtpAttempts,
    #[error("current password is incorrect")]
    WrongPassword,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NonInstitutionalEmail => "NON_INSTITUTIONAL_EMAIL",
            Self::AlreadyVerified => "ALREADY_VERIFIED",
            Self::InvalidOtp => "INVALID_OTP",
            Self::TooManyOtpAttempts => "TOO_MANY_OTP_ATTEMPTS",
            Self::WrongPassword => "WRONG_PASSWORD",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NonInstitutionalEmail
            | Self::AlreadyVerified
            | Self::InvalidOtp
            | Self::WrongPassword
            | Self::MissingData => StatusCode::BAD_REQUEST,
            Self::TooManyOtpAttempts => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
