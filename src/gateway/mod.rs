//! AI gateway — best-effort calls to the remote model.
//!
//! Both operations swallow every failure and hand back a deterministic
//! stand-in, so screens can render the result as ordinary content. The
//! internal [`Outcome`] keeps the model/fallback distinction for logging
//! and tests.

pub mod advisor;
pub mod decomposer;
pub mod json;
pub mod outcome;
pub mod prompts;

pub use advisor::{CareerAdvisor, EMPTY_ADVICE_FALLBACK, SERVICE_BUSY_FALLBACK};
pub use decomposer::{DecomposerConfig, TaskDecomposer, fallback_tasks};
pub use outcome::Outcome;

use std::sync::Arc;

use crate::error::Result;
use crate::llm::{LlmConfig, LlmProvider, create_provider};
use crate::model::{UserProfile, WorkTask};

/// Entry point for the two model-backed operations.
pub struct AiGateway {
    advisor: CareerAdvisor,
    decomposer: TaskDecomposer,
}

impl AiGateway {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self::with_config(llm, DecomposerConfig::default())
    }

    pub fn with_config(llm: Arc<dyn LlmProvider>, config: DecomposerConfig) -> Self {
        Self {
            advisor: CareerAdvisor::new(Arc::clone(&llm)),
            decomposer: TaskDecomposer::new(llm, config),
        }
    }

    /// Validate `config` and build a gateway over the configured provider.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(create_provider(config)?))
    }

    /// Gateway over the default model, keyed from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&LlmConfig::from_env()?)
    }

    /// Short "Silver+Agent" role recommendation. Never empty, never fails.
    pub async fn analyze_career_potential(&self, profile: &UserProfile) -> String {
        self.advisor.advise(profile).await.into_value()
    }

    /// Ordered pending tasks for `goal`. Never empty, never fails.
    pub async fn decompose_task(&self, goal: &str) -> Vec<WorkTask> {
        self.decomposer.decompose(goal).await.into_value()
    }

    pub fn advisor(&self) -> &CareerAdvisor {
        &self.advisor
    }

    pub fn decomposer(&self) -> &TaskDecomposer {
        &self.decomposer
    }
}
