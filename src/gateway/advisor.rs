//! Career advice for a user profile.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::llm::provider::{ChatMessage, CompletionRequest, LlmProvider};
use crate::model::UserProfile;

use super::outcome::Outcome;
use super::prompts;

/// Shown when the model answers with empty text.
pub const EMPTY_ADVICE_FALLBACK: &str = "无法生成建议，请稍后重试。";

/// Shown when the remote call fails.
pub const SERVICE_BUSY_FALLBACK: &str = "AI 服务当前正忙，请稍后重试。";

/// Asks the model for "Silver+Agent" role suggestions.
pub struct CareerAdvisor {
    llm: Arc<dyn LlmProvider>,
}

impl CareerAdvisor {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Single best-effort call. Never fails; errors become fallback text.
    pub async fn advise(&self, profile: &UserProfile) -> Outcome<String> {
        info!(
            profile_id = %profile.id,
            model = self.llm.model_name(),
            "Generating career advice"
        );

        let request =
            CompletionRequest::new(vec![ChatMessage::user(prompts::career_advice(profile))]);

        match self.llm.complete(request).await {
            Ok(response) if response.content.is_empty() => {
                warn!(profile_id = %profile.id, "Model returned empty career advice");
                Outcome::fallback(EMPTY_ADVICE_FALLBACK.to_string(), "empty model output")
            }
            Ok(response) => Outcome::Ok(response.content),
            Err(e) => {
                error!(profile_id = %profile.id, error = %e, "Career analysis failed");
                Outcome::fallback(SERVICE_BUSY_FALLBACK.to_string(), e.to_string())
            }
        }
    }
}
