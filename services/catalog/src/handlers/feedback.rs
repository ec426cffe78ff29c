use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::feedback::{SubmitFeedbackInput, SubmitFeedbackUseCase};

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub email: String,
    pub feedback: String,
    pub rating: Option<i16>,
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(body): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<Value>), CatalogServiceError> {
    let usecase = SubmitFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    usecase
        .execute(SubmitFeedbackInput {
            email: body.email,
            feedback: body.feedback,
            rating: body.rating,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}
