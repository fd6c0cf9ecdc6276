//! Progress reporting for traffic simulations

use colored::Colorize;
use forum_application::{ProgressNotifier, SimulationPhase};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

fn phase_display_name(phase: SimulationPhase) -> &'static str {
    match phase {
        SimulationPhase::Questions => "Phase 1: Create questions",
        SimulationPhase::Replies => "Phase 2: Post replies",
        SimulationPhase::Verify => "Phase 3: Verify store",
    }
}

fn phase_short_name(phase: SimulationPhase) -> &'static str {
    match phase {
        SimulationPhase::Questions => "Phase 1",
        SimulationPhase::Replies => "Phase 2",
        SimulationPhase::Verify => "Phase 3",
    }
}

/// Reports simulation progress with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
    failures: AtomicUsize,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
            failures: AtomicUsize::new(0),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: SimulationPhase, total_tasks: usize) {
        self.failures.store(0, Ordering::Relaxed);

        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase_display_name(phase));
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.phase_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: SimulationPhase, success: bool) {
        let failures = if success {
            self.failures.load(Ordering::Relaxed)
        } else {
            self.failures.fetch_add(1, Ordering::Relaxed) + 1
        };

        if let Ok(bar) = self.phase_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            if failures > 0 {
                pb.set_message(format!("{} {} failed", "x".red(), failures));
            }
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: SimulationPhase) {
        if let Ok(mut bar) = self.phase_bar.lock()
            && let Some(pb) = bar.take()
        {
            let name = phase_short_name(phase);
            if self.failures.load(Ordering::Relaxed) == 0 {
                pb.finish_with_message(format!("{} complete!", name.green()));
            } else {
                pb.finish_with_message(format!("{} finished with failures", name.red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Prints one line per phase start and one summary line per phase.
#[derive(Default)]
pub struct SimpleProgress {
    succeeded: AtomicUsize,
    failed: AtomicUsize,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: SimulationPhase, total_tasks: usize) {
        self.succeeded.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            phase_display_name(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: SimulationPhase, success: bool) {
        let counter = if success { &self.succeeded } else { &self.failed };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn on_phase_complete(&self, _phase: SimulationPhase) {
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        if failed == 0 {
            println!("  {} {} done", "v".green(), succeeded);
        } else {
            println!("  {} {} done, {} failed", "x".red(), succeeded, failed);
        }
    }
}
