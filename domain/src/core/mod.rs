//! Core domain concepts shared across the forum.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string::preview`]: single-line previews of free text

pub mod error;
pub mod string;
