//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement. The forum store port itself lives in the domain layer
//! ([`forum_domain::ForumRepository`]).

pub mod activity_log;
pub mod progress;
