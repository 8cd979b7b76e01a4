use association_canonical::{CanonicalKey, ConfigurationError};
use std::fmt;
use thiserror::Error;

use crate::validator::ValidationError;

/// Mutation attempted on a read-only container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Insert or overwrite.
    Set,
    /// Delete.
    Remove,
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Set => f.write_str("set"),
            Mutation::Remove => f.write_str("remove"),
        }
    }
}

/// Errors that can occur during container operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssociationError {
    /// The lookup token could not be resolved to a key.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    /// The key is absent and no default applies.
    #[error("association with key {key} does not exist")]
    NotFound {
        /// Resolved key that was looked up.
        key: CanonicalKey,
    },
    /// The stored value failed the configured validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A mutation was attempted after construction.
    #[error("cannot {operation} association, containers are fixed at construction")]
    Immutable {
        /// Rejected operation.
        operation: Mutation,
    },
}
