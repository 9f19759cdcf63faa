//! Skill assessment screen state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use crate::catalog;
use crate::gateway::AiGateway;
use crate::model::UserProfile;

/// One axis of the ability radar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    pub subject: String,
    pub score: u8,
    pub full_mark: u8,
}

impl AbilityScore {
    pub fn new(subject: impl Into<String>, score: u8) -> Self {
        Self {
            subject: subject.into(),
            score: score.min(100),
            full_mark: 100,
        }
    }
}

/// The five radar axes of the demo user.
pub fn demo_abilities() -> Vec<AbilityScore> {
    vec![
        AbilityScore::new("行业经验", 95),
        AbilityScore::new("人际沟通", 85),
        AbilityScore::new("判断力", 90),
        AbilityScore::new("数字技能", 40),
        AbilityScore::new("AI协作潜力", 75),
    ]
}

#[derive(Debug, Default)]
struct State {
    suggestion: Option<String>,
    loading: bool,
}

/// Assessment screen state.
pub struct Assessment {
    gateway: Arc<AiGateway>,
    profile: UserProfile,
    abilities: Vec<AbilityScore>,
    state: RwLock<State>,
}

impl Assessment {
    pub fn new(gateway: Arc<AiGateway>, profile: UserProfile, abilities: Vec<AbilityScore>) -> Self {
        Self {
            gateway,
            profile,
            abilities,
            state: RwLock::new(State::default()),
        }
    }

    /// Assessment for the demo user.
    pub fn demo(gateway: Arc<AiGateway>) -> Self {
        Self::new(gateway, catalog::demo_profile(), demo_abilities())
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn abilities(&self) -> &[AbilityScore] {
        &self.abilities
    }

    /// Ask the gateway for a suggestion and keep it. Replaces any earlier one.
    pub async fn request_suggestion(&self) -> String {
        self.state.write().await.loading = true;

        let suggestion = self.gateway.analyze_career_potential(&self.profile).await;
        info!(profile_id = %self.profile.id, "Career suggestion ready");

        let mut state = self.state.write().await;
        state.suggestion = Some(suggestion.clone());
        state.loading = false;
        suggestion
    }

    pub async fn suggestion(&self) -> Option<String> {
        self.state.read().await.suggestion.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
