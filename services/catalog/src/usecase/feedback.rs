use chrono::Utc;
use uuid::Uuid;

use campusfind_domain::email::is_plausible_email;

use crate::domain::repository::FeedbackRepository;
use crate::domain::types::Feedback;
use crate::error::CatalogServiceError;

/// Feedback shorter than this is rejected.
pub const MIN_FEEDBACK_LEN: usize = 10;

pub struct SubmitFeedbackInput {
    pub email: String,
    pub feedback: String,
    pub rating: Option<i16>,
}

pub struct SubmitFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> SubmitFeedbackUseCase<R> {
    pub async fn execute(
        &self,
        input: SubmitFeedbackInput,
    ) -> Result<Feedback, CatalogServiceError> {
        if !is_plausible_email(&input.email) {
            return Err(CatalogServiceError::InvalidFeedback(
                "a valid email address is required",
            ));
        }
        let text = input.feedback.trim();
        if text.chars().count() < MIN_FEEDBACK_LEN {
            return Err(CatalogServiceError::InvalidFeedback(
                "feedback must be at least 10 characters",
            ));
        }
        let rating = match input.rating {
            None | Some(0) => 0,
            Some(r @ 1..=5) => r,
            Some(_) => {
                return Err(CatalogServiceError::InvalidFeedback(
                    "rating must be between 1 and 5",
                ));
            }
        };

        let feedback = Feedback {
            id: Uuid::now_v7(),
            email: input.email,
            feedback: text.to_owned(),
            rating,
            created_at: Utc::now(),
        };
        self.repo.create(&feedback).await?;
        Ok(feedback)
    }
}
