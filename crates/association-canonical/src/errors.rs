use crate::kind::ValueKind;
use thiserror::Error;

/// Errors raised when a lookup token cannot be turned into a canonical key.
///
/// These always indicate an integration bug (wrong token kind, missing
/// adapter) rather than missing data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// An object token was used but no key adapter is configured.
    #[error("cannot derive key from object {type_name}, no key adapter configured")]
    MissingAdapter {
        /// Concrete type of the object token.
        type_name: &'static str,
    },
    /// The configured adapter does not handle this object.
    #[error("key adapter cannot derive key from object {type_name}")]
    UnresolvableObject {
        /// Concrete type of the object token.
        type_name: &'static str,
    },
    /// The token is neither a primitive nor an object.
    #[error("cannot derive key from {kind}")]
    UnsupportedToken {
        /// Kind of the rejected token.
        kind: ValueKind,
    },
}
