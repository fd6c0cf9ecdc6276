//! Logging infrastructure: structured activity logging.
//!
//! Provides [`JsonlActivityLogger`], a JSONL file writer that implements
//! the [`ActivityLogger`](forum_application::ActivityLogger) port.

mod jsonl_activity_logger;

pub use jsonl_activity_logger::JsonlActivityLogger;
