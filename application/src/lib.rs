//! Application layer for forum-board
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    activity_log::{ActivityEvent, ActivityLogger, NoActivityLog},
    progress::{NoProgress, ProgressNotifier, SimulationPhase},
};
pub use use_cases::get_question::{GetQuestionError, GetQuestionUseCase};
pub use use_cases::list_questions::{ListQuestionsError, ListQuestionsOutput, ListQuestionsUseCase};
pub use use_cases::post_question::{PostQuestionError, PostQuestionInput, PostQuestionUseCase};
pub use use_cases::reply_to_question::{
    ReplyToQuestionError, ReplyToQuestionInput, ReplyToQuestionUseCase,
};
pub use use_cases::shared::StoreFailure;
pub use use_cases::simulate_traffic::{
    SimulateTrafficError, SimulateTrafficInput, SimulateTrafficUseCase, TrafficReport,
    check_invariants,
};
