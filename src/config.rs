//! Configuration types.

use std::time::Duration;

/// Environment variable holding the model API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Legacy name for the API key variable, checked when `GEMINI_API_KEY` is unset.
pub const API_KEY_ENV_FALLBACK: &str = "API_KEY";

/// Workstation configuration.
#[derive(Debug, Clone)]
pub struct WorkstationConfig {
    /// Pause between a goal submission and the decomposition call, so the
    /// busy indicator is visible even when the model answers instantly.
    pub agent_think_delay: Duration,
}

impl Default for WorkstationConfig {
    fn default() -> Self {
        Self {
            agent_think_delay: Duration::from_millis(1500),
        }
    }
}

impl WorkstationConfig {
    /// Configuration with no artificial delay.
    pub fn immediate() -> Self {
        Self {
            agent_think_delay: Duration::ZERO,
        }
    }
}
