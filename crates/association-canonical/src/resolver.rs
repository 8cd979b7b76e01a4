use crate::adapter::KeyAdapter;
use crate::errors::ConfigurationError;
use crate::key::CanonicalKey;
use crate::token::Token;
use std::fmt;
use std::sync::Arc;

/// Turns lookup tokens into canonical keys.
///
/// Strings and integers pass through unchanged. Object tokens are delegated
/// to the adapter; without one they are a configuration error.
#[derive(Clone, Default)]
pub struct KeyResolver {
    adapter: Option<Arc<dyn KeyAdapter>>,
}

impl KeyResolver {
    /// Creates a resolver with an optional adapter.
    pub fn new(adapter: Option<Arc<dyn KeyAdapter>>) -> Self {
        Self { adapter }
    }

    /// Creates a resolver that only accepts primitive tokens.
    pub fn primitive_only() -> Self {
        Self { adapter: None }
    }

    /// Creates a resolver backed by `adapter`.
    pub fn with_adapter(adapter: Arc<dyn KeyAdapter>) -> Self {
        Self {
            adapter: Some(adapter),
        }
    }

    /// Whether object tokens can be resolved.
    pub fn has_adapter(&self) -> bool {
        self.adapter.is_some()
    }

    /// Resolves a token to its canonical key.
    pub fn resolve(&self, token: &Token<'_>) -> Result<CanonicalKey, ConfigurationError> {
        match *token {
            Token::Str(s) => Ok(CanonicalKey::Str(s.to_string())),
            Token::Int(i) => Ok(CanonicalKey::Int(i)),
            Token::Ref { object, type_name } => {
                let adapter = self
                    .adapter
                    .as_ref()
                    .ok_or(ConfigurationError::MissingAdapter { type_name })?;
                adapter
                    .key_of(object)
                    .ok_or(ConfigurationError::UnresolvableObject { type_name })
            }
            Token::Unsupported(kind) => Err(ConfigurationError::UnsupportedToken { kind }),
        }
    }
}

impl fmt::Debug for KeyResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyResolver")
            .field("has_adapter", &self.has_adapter())
            .finish()
    }
}
