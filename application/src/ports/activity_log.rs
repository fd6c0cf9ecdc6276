//! Port for structured activity logging.
//!
//! Defines the [`ActivityLogger`] trait for recording forum activity
//! (questions posted, replies posted, rejected input) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures an audit
//! trail in a machine-readable format (JSONL).

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A structured activity event for logging.
pub struct ActivityEvent {
    /// Event type identifier (e.g., "question_posted", "reply_posted").
    pub event_type: &'static str,
    /// When the event happened.
    pub occurred_at: DateTime<Utc>,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ActivityEvent {
    /// Create a new activity event stamped with the current UTC time.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            occurred_at: Utc::now(),
            payload,
        }
    }
}

/// Port for logging activity events to a structured log.
///
/// `log` is synchronous and infallible so that a broken log never fails a
/// forum operation; implementations swallow their own I/O errors.
pub trait ActivityLogger: Send + Sync {
    /// Record an activity event.
    fn log(&self, event: ActivityEvent);
}

/// No-op implementation for tests and when activity logging is disabled.
pub struct NoActivityLog;

impl ActivityLogger for NoActivityLog {
    fn log(&self, _event: ActivityEvent) {}
}
