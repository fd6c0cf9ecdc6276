//! Domain layer for forum-board
//!
//! This crate contains the forum entities, identifiers, field validation and
//! the repository port. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: a top-level post with an author, a message and an ordered
//!   list of replies
//! - **Reply**: a response attached to exactly one question at creation time
//! - **ForumRepository**: the store that owns both and hands out their ids

pub mod config;
pub mod core;
pub mod forum;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, string::preview};
pub use forum::{
    entities::{Question, Reply},
    repository::ForumRepository,
    validation::{FieldError, PostContent, PostKind, ValidationErrors},
    value_objects::{QuestionId, ReplyId},
};
