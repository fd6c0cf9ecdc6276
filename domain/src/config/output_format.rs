//! Output format value object

use serde::{Deserialize, Serialize};

/// How forum results are rendered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, optionally colored text (default)
    Text,
    /// One compact JSON document per result
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
