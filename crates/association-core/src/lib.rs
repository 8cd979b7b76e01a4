//! Immutable, type-validated associations.
//!
//! This crate provides:
//! - [`Association`], a read-only map from canonical key to one value
//! - [`Associations`], a read-only map from canonical key to a sequence of values
//! - [`ValueValidator`], an optional predicate checked on every read
//! - [`Fallback`], the explicit "default given / omitted" lookup argument
//!
//! Core invariants:
//! - The key set and the values behind each key never change after construction
//! - A key either exists (lookup succeeds, subject to validation) or does not
//!   (lookup fails with `NotFound` unless a default was given)
//! - Object tokens need a key adapter; without one every lookup is a
//!   configuration error, never a silent miss
//!
//! ## Quick Start
//!
//! ```rust
//! use association_core::{Association, AssociationError, Fallback};
//!
//! let scores = Association::new([("a", 1), ("b", 2)]);
//!
//! assert_eq!(scores.at("a")?, &1);
//! assert_eq!(scores.get_or("c", &0)?, &0);
//!
//! let missing: Result<&i32, _> = scores.get("c", Fallback::Omitted);
//! assert!(matches!(missing, Err(AssociationError::NotFound { .. })));
//! # Ok::<(), AssociationError>(())
//! ```
//!
#![deny(missing_docs)]

/// Single-value container.
pub mod association;
/// Multi-value container.
pub mod associations;
/// Error types for container operations.
pub mod errors;
/// Explicit default argument for lookups.
pub mod fallback;
/// Type-erased object values.
pub mod instance;
mod table;
/// Value validation on read.
pub mod validator;

pub use association::Association;
pub use association_canonical::{
    adapter_fn, CanonicalKey, ChainAdapter, ConfigurationError, FnAdapter, JsonFieldAdapter,
    KeyAdapter, KeyResolver, Token, ValueKind,
};
pub use associations::Associations;
pub use errors::{AssociationError, Mutation};
pub use fallback::Fallback;
pub use instance::Instance;
pub use validator::{ValidationError, ValueValidator};
