//! Progress notification port
//!
//! Defines the interface for reporting progress while a traffic simulation
//! runs against the store.

/// Stages of a traffic simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    /// Concurrent question creation
    Questions,
    /// Concurrent replies to the created questions
    Replies,
    /// Invariant checks over the final store contents
    Verify,
}

impl SimulationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationPhase::Questions => "questions",
            SimulationPhase::Replies => "replies",
            SimulationPhase::Verify => "verify",
        }
    }
}

/// Callback for progress updates during a simulation
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: SimulationPhase, total_tasks: usize);

    /// Called when a task completes within a phase
    fn on_task_complete(&self, phase: SimulationPhase, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: SimulationPhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: SimulationPhase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: SimulationPhase, _success: bool) {}
    fn on_phase_complete(&self, _phase: SimulationPhase) {}
}
