//! Traffic simulation configuration from TOML (`[simulation]` section)

use serde::{Deserialize, Serialize};

/// Raw simulation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    /// Questions created concurrently per run
    pub questions: usize,
    /// Replies posted concurrently to each question
    pub replies_per_question: usize,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        Self {
            questions: 8,
            replies_per_question: 16,
        }
    }
}
