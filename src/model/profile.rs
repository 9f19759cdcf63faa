//! User profile snapshot fed into career advice.

use serde::{Deserialize, Serialize};

/// Upper bound for the 0–100 profile scores.
pub const MAX_SCORE: u8 = 100;

/// Immutable profile snapshot. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub experience_years: u32,
    /// Human skills (wisdom, judgment), in display order.
    pub skills: Vec<String>,
    /// 0–100.
    pub digital_literacy_score: u8,
    /// 0–100.
    pub agent_synergy_score: u8,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            experience_years: 0,
            skills: Vec::new(),
            digital_literacy_score: 0,
            agent_synergy_score: 0,
        }
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set both scores, clamped to 0–100.
    pub fn with_scores(mut self, digital_literacy: u8, agent_synergy: u8) -> Self {
        self.digital_literacy_score = digital_literacy.min(MAX_SCORE);
        self.agent_synergy_score = agent_synergy.min(MAX_SCORE);
        self
    }
}
