//! CLI entrypoint for Forum Board
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use forum_application::{
    ActivityLogger, ProgressNotifier, SimulateTrafficInput, SimulateTrafficUseCase,
};
use forum_domain::OutputFormat;
use forum_infrastructure::{ConfigLoader, FileConfig, InMemoryForumStore, JsonlActivityLogger};
use forum_presentation::{
    Cli, ForumRepl, ForumSession, OutputFormatter, ProgressReporter, SimpleProgress,
    formatter_for,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting Forum Board");
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = formatter_for(format);

    // === Dependency Injection ===
    let store = Arc::new(InMemoryForumStore::new());

    if cli.simulate {
        return run_simulation(&cli, &config, store, formatter.as_ref(), format).await;
    }

    let mut session = ForumSession::new(store, formatter);
    if let Some(activity) = open_activity_log(config.logging.activity_log.as_deref()) {
        session = session.with_activity_logger(activity);
    }

    let history = config
        .repl
        .history_file
        .as_deref()
        .map(expand_home)
        .or_else(ConfigLoader::default_history_path);

    ForumRepl::new(session)
        .with_prompt(config.repl.prompt.clone())
        .with_history(history)
        .run()
        .context("REPL terminated")?;

    Ok(())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `-v`; `[logging] file` redirects output from stderr
/// to a non-blocking file writer.
fn init_logging(verbose: u8, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(file) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        return Ok(None);
    };

    let path = expand_home(file);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create log directory {}", parent.display()))?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(log_file);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn open_activity_log(path: Option<&str>) -> Option<Arc<dyn ActivityLogger>> {
    let path = expand_home(path?);
    let logger = JsonlActivityLogger::new(&path)?;
    info!("Activity log: {}", logger.path().display());
    Some(Arc::new(logger))
}

async fn run_simulation(
    cli: &Cli,
    config: &FileConfig,
    store: Arc<InMemoryForumStore>,
    formatter: &dyn OutputFormatter,
    format: OutputFormat,
) -> Result<()> {
    let input = SimulateTrafficInput::new(
        cli.questions.unwrap_or(config.simulation.questions),
        cli.replies.unwrap_or(config.simulation.replies_per_question),
    );

    // JSON output stays machine-readable: no progress on stdout
    let progress: Box<dyn ProgressNotifier> = match (format, cli.quiet) {
        (OutputFormat::Json, _) => Box::new(forum_application::NoProgress),
        (OutputFormat::Text, true) => Box::new(SimpleProgress::new()),
        (OutputFormat::Text, false) => Box::new(ProgressReporter::new()),
    };

    let use_case = SimulateTrafficUseCase::new(Arc::clone(&store));
    let report = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let stats = store.stats()?;
    info!(
        "Store after simulation: {} questions, {} replies (last ids {}/{})",
        stats.questions, stats.replies, stats.last_question_id, stats.last_reply_id
    );

    println!("{}", formatter.traffic_report(&report));

    if !report.is_consistent() {
        bail!(
            "Simulation found {} invariant violation(s)",
            report.violations.len()
        );
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => Path::new(path).to_path_buf(),
    }
}
