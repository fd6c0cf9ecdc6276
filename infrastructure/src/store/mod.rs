//! Forum store adapters.
//!
//! [`InMemoryForumStore`] implements the
//! [`ForumRepository`](forum_domain::ForumRepository) port.

mod error;
mod in_memory;

pub use error::StoreError;
pub use in_memory::{InMemoryForumStore, StoreStats};
