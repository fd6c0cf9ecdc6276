//! Use cases
//!
//! Application-level operations that validate caller input and drive the
//! forum store.

pub mod get_question;
pub mod list_questions;
pub mod post_question;
pub mod reply_to_question;
pub mod simulate_traffic;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
