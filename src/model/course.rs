//! Learning courses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// Badge text on the learning screen.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "入门",
            Self::Intermediate => "初级",
            Self::Advanced => "进阶",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    /// Display label, e.g. `15 分钟`.
    pub duration: String,
    /// Percent complete, 0–100.
    pub progress: u8,
    pub level: CourseLevel,
}
