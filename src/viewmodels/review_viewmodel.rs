// ============================================================================
// REVIEW VIEWMODEL
// ============================================================================

use crate::models::{Rating, ReviewDraft, WalkerId};
use crate::services::{ApiClient, GlooTransport, HttpTransport};

#[derive(Clone, Debug, PartialEq)]
pub enum ReviewOutcome {
    Submitted,
    Failed(String),
}

impl ReviewOutcome {
    pub fn alert_text(&self) -> String {
        match self {
            ReviewOutcome::Submitted => "Review submitted successfully!".to_string(),
            ReviewOutcome::Failed(error) => format!("Failed to submit review: {}", error),
        }
    }
}

pub struct ReviewViewModel<T = GlooTransport> {
    api: ApiClient<T>,
}

impl ReviewViewModel {
    pub fn new() -> Self {
        Self::with_client(ApiClient::new())
    }
}

impl<T: HttpTransport> ReviewViewModel<T> {
    pub fn with_client(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn submit_review(
        &self,
        rating: Rating,
        text: &str,
        walker_id: Option<WalkerId>,
    ) -> ReviewOutcome {
        let draft = ReviewDraft {
            rating,
            review: text.to_string(),
            walker_id,
        };

        match self.api.create_review(&draft).await {
            Ok(_) => {
                log::info!("⭐ Review submitted ({} stars)", rating.stars());
                ReviewOutcome::Submitted
            }
            Err(e) => {
                log::error!("❌ Failed to submit review: {}", e);
                ReviewOutcome::Failed(e.to_string())
            }
        }
    }
}
