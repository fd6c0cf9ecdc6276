//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// Both paths are optional; when unset, diagnostics go to stderr and no
/// activity log is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write `tracing` diagnostics to this file instead of stderr
    pub file: Option<String>,
    /// Append JSONL activity events (questions, replies, rejections) here
    pub activity_log: Option<String>,
}
