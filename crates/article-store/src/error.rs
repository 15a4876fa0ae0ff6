//! Error types for article store operations.

use thiserror::Error;

use crate::types::ArticleId;

/// Errors that can occur during article store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No live article has this identifier.
    #[error("article not found: {id}")]
    NotFound { id: ArticleId },

    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
