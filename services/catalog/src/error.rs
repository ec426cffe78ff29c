use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("item not found")]
    ItemNotFound,
    #[error("missing required claim field: {0}")]
    MissingClaimField(&'static str),
    #[error("missing required field: {0}")]
    InvalidSubmission(&'static str),
    #[error("at most {limit} images are accepted")]
    TooManyImages { limit: usize },
    #[error("image exceeds the {limit_bytes} byte limit")]
    ImageTooLarge { limit_bytes: usize },
    #[error("unsupported image type: {0}")]
    UnsupportedImageType(String),
    #[error("invalid feedback: {0}")]
    InvalidFeedback(&'static str),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::MissingClaimField(_) => "MISSING_CLAIM_FIELD",
            Self::InvalidSubmission(_) => "INVALID_SUBMISSION",
            Self::TooManyImages { .. } => "TOO_MANY_IMAGES",
            Self::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
            Self::UnsupportedImageType(_) => "UNSUPPORTED_IMAGE_TYPE",
            Self::InvalidFeedback(_) => "INVALID_FEEDBACK",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ItemNotFound => StatusCode::NOT_FOUND,
            Self::MissingClaimField(_)
            | Self::InvalidSubmission(_)
            | Self::TooManyImages { .. }
            | Self::ImageTooLarge { .. }
            | Self::UnsupportedImageType(_)
            | Self::InvalidFeedback(_) => StatusCode::BAD_REQUEST,
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
