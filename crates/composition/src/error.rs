//! Error types for the composition crate

use thiserror::Error;

/// Errors that can occur while composing desired resources
#[derive(Error, Debug)]
pub enum Error {
    /// A required observed field is absent or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The derived storage-account name violates the provider constraint
    #[error("derived account name {name:?} is not 3-24 lowercase alphanumeric characters")]
    NamingConstraint { name: String },

    /// A desired spec could not be written into its slot
    #[error(transparent)]
    State(#[from] reconcile::Error),
}

/// Result type for composition operations
pub type Result<T> = std::result::Result<T, Error>;
