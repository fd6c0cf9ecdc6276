//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// One JSON document per result
    Json,
}

impl From<OutputFormat> for forum_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => forum_domain::OutputFormat::Text,
            OutputFormat::Json => forum_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for forum-board
#[derive(Parser, Debug)]
#[command(name = "forum-board")]
#[command(author, version, about = "In-memory question and reply board")]
#[command(long_about = r#"
Forum Board keeps questions and their replies in memory and lets you post,
list and answer them from an interactive prompt.

Configuration files are loaded from (in priority order):
1. FORUM_<SECTION>__<KEY>                 Environment variables
2. --config <path>                        Explicit config file
3. ./forum.toml                           Project-level config
4. ~/.config/forum-board/config.toml      Global config

Example:
  forum-board
  forum-board -o json
  forum-board --simulate --questions 32 --replies 64
"#)]
pub struct Cli {
    /// Run a concurrent traffic simulation instead of the interactive prompt
    #[arg(long)]
    pub simulate: bool,

    /// Questions to create during the simulation
    #[arg(long, value_name = "N", requires = "simulate")]
    pub questions: Option<usize>,

    /// Replies to post to each question during the simulation
    #[arg(long, value_name = "N", requires = "simulate")]
    pub replies: Option<usize>,

    /// Output format (overrides `[output] format`)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress bars (plain progress lines instead)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
