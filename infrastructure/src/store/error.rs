//! Store error types

use thiserror::Error;

/// Contract failures inside the store.
///
/// "Not found" is never an error here; lookups return `None` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} lock poisoned by a panicking writer")]
    LockPoisoned(&'static str),
}
