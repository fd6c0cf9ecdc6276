//! Configuration file loading for forum-board
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FORUM_*` environment variables (`FORUM_REPL__PROMPT="> "`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./forum.toml` or `./.forum.toml`
//! 4. Global: `<config_dir>/forum-board/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileReplConfig, FileSimulationConfig,
};
pub use loader::ConfigLoader;
