//! Canonical key primitives shared by every association container.
//!
//! A lookup starts from a [`Token`] (a string, an integer, or a borrowed
//! object) and ends at a [`CanonicalKey`]. Objects are turned into keys by a
//! caller-supplied [`KeyAdapter`]; the [`KeyResolver`] performs the dispatch
//! and reports integration mistakes as [`ConfigurationError`].
//!
#![deny(missing_docs)]

/// Key adapters deriving canonical keys from objects.
pub mod adapter;
/// Configuration errors raised during key resolution.
pub mod errors;
/// Canonical key type.
pub mod key;
/// Dynamic value kinds used in labels and token rejection.
pub mod kind;
/// Token to key resolution.
pub mod resolver;
/// Lookup tokens.
pub mod token;

pub use adapter::{adapter_fn, ChainAdapter, FnAdapter, JsonFieldAdapter, KeyAdapter};
pub use errors::ConfigurationError;
pub use key::CanonicalKey;
pub use kind::ValueKind;
pub use resolver::KeyResolver;
pub use token::Token;
