//! Forum domain.
//!
//! - [`entities::Question`]: a top-level post owning its ordered replies
//! - [`entities::Reply`]: a response to a question
//! - [`value_objects::QuestionId`] / [`value_objects::ReplyId`]: store-assigned identifiers
//! - [`validation::PostContent`]: author + message that passed blank checks
//! - [`repository::ForumRepository`]: port implemented by the store adapter

pub mod entities;
pub mod repository;
pub mod validation;
pub mod value_objects;
