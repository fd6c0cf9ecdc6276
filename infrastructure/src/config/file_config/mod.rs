//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod repl;
mod simulation;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use simulation::FileSimulationConfig;

use serde::{Deserialize, Serialize};

/// A configuration value that loads but will not behave as intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted path of the offending key, e.g. `repl.prompt`
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Diagnostic and activity log destinations
    pub logging: FileLoggingConfig,
    /// Traffic simulation sizing
    pub simulation: FileSimulationConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues are warnings: the configuration is still usable.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.repl.prompt.trim().is_empty() {
            issues.push(ConfigValidationError {
                field: "repl.prompt",
                message: "prompt is empty; input lines will have no marker".to_string(),
            });
        }

        if self.simulation.questions == 0 {
            issues.push(ConfigValidationError {
                field: "simulation.questions",
                message: "must be at least 1 for --simulate to run".to_string(),
            });
        }

        for (field, path) in [
            ("logging.file", &self.logging.file),
            ("logging.activity_log", &self.logging.activity_log),
        ] {
            if path.as_deref().is_some_and(|p| p.trim().is_empty()) {
                issues.push(ConfigValidationError {
                    field,
                    message: "path is empty; remove the key to disable this log".to_string(),
                });
            }
        }

        issues
    }
}
