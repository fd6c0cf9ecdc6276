//! Shared utilities for use cases.

use tracing::warn;

/// Boxed store error carried by every use case error enum.
pub type StoreFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Log a store contract failure and box it for the caller.
pub(crate) fn store_failure<E>(operation: &str, err: E) -> StoreFailure
where
    E: std::error::Error + Send + Sync + 'static,
{
    warn!("Store failure during {}: {}", operation, err);
    Box::new(err)
}
