//! Job postings shown on the jobs screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    Remote,
    PartTime,
    Consultant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub company: String,
    pub base_salary: String,
    /// Stock options or dividends.
    pub equity: String,
    /// Percentage of the work presumed automatable, 0–100.
    pub agent_dependency: u8,
    pub description: String,
    pub tags: Vec<String>,
}

impl Job {
    /// Share of the work left to the human, 0–100.
    pub fn human_share(&self) -> u8 {
        100u8.saturating_sub(self.agent_dependency)
    }
}
