//! Presentation layer for forum-board
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive forum prompt.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, Status, formatter_for};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::{ForumRepl, ForumSession};
