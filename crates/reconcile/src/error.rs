//! Error types for the reconcile crate

use thiserror::Error;

/// Errors that can occur at the reconcile boundary
#[derive(Error, Debug)]
pub enum Error {
    /// A document could not be encoded or decoded
    #[error("document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for reconcile operations
pub type Result<T> = std::result::Result<T, Error>;
