use association_canonical::{CanonicalKey, KeyAdapter, Token};
use std::fmt;
use std::sync::Arc;

use crate::errors::{AssociationError, Mutation};
use crate::fallback::Fallback;
use crate::table::KeyedTable;
use crate::validator::ValueValidator;

/// Read-only map from canonical key to exactly one value.
///
/// Every successful read runs the value through the configured
/// [`ValueValidator`], if any.
pub struct Association<T> {
    table: KeyedTable<T>,
    validator: Option<ValueValidator<T>>,
}

impl<T> Association<T> {
    /// Builds an association over primitive keys only, without validation.
    pub fn new<K, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<CanonicalKey>,
    {
        Self::from_parts(entries, None, None)
    }

    /// Builds an association with an optional key adapter and validator.
    ///
    /// Both are fixed for the lifetime of the container.
    pub fn from_parts<K, I>(
        entries: I,
        adapter: Option<Arc<dyn KeyAdapter>>,
        validator: Option<ValueValidator<T>>,
    ) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<CanonicalKey>,
    {
        let table = KeyedTable::build(entries, adapter);
        tracing::debug!(
            entries = table.len(),
            adapter = table.has_adapter(),
            validator = validator.as_ref().map(|v| v.expected()),
            "built association"
        );
        Self { table, validator }
    }

    /// Looks up `token`, falling back to `fallback` when the key is absent.
    ///
    /// - present: the validated value, converted into `D`
    /// - absent, `Fallback::Given(d)`: `d`, even if it is `None`
    /// - absent, `Fallback::Omitted`: [`AssociationError::NotFound`]
    ///
    /// With `D = &T` this is a plain lookup; with `D = Option<&T>` and
    /// `Fallback::Given(None)` a miss comes back as `None`.
    pub fn get<'s, 'k, D>(
        &'s self,
        token: impl Into<Token<'k>>,
        fallback: Fallback<D>,
    ) -> Result<D, AssociationError>
    where
        D: From<&'s T>,
    {
        match self.table.lookup(&token.into())? {
            (_, Some(value)) => Ok(D::from(self.checked(value)?)),
            (key, None) => match fallback {
                Fallback::Given(default) => Ok(default),
                Fallback::Omitted => Err(AssociationError::NotFound { key }),
            },
        }
    }

    /// Looks up `token`, returning `default` when the key is absent.
    pub fn get_or<'s, 'k>(
        &'s self,
        token: impl Into<Token<'k>>,
        default: &'s T,
    ) -> Result<&'s T, AssociationError> {
        self.get(token, Fallback::Given(default))
    }

    /// Looks up `token`, returning `None` when the key is absent.
    pub fn try_get<'k>(
        &self,
        token: impl Into<Token<'k>>,
    ) -> Result<Option<&T>, AssociationError> {
        self.get(token, Fallback::Given(None))
    }

    /// Indexed read: the validated value, or `NotFound`.
    pub fn at<'k>(&self, token: impl Into<Token<'k>>) -> Result<&T, AssociationError> {
        match self.table.lookup(&token.into())? {
            (_, Some(value)) => self.checked(value),
            (key, None) => Err(AssociationError::NotFound { key }),
        }
    }

    /// Whether `token` resolves to a present key.
    ///
    /// Resolution errors propagate; only a resolved-but-absent key is `false`.
    pub fn contains<'k>(&self, token: impl Into<Token<'k>>) -> Result<bool, AssociationError> {
        self.table.contains(&token.into())
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the association has no keys.
    pub fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Keys in canonical order.
    pub fn keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.table.keys()
    }

    /// Whether object tokens can be resolved.
    pub fn has_adapter(&self) -> bool {
        self.table.has_adapter()
    }

    /// The validator applied on read, if any.
    pub fn validator(&self) -> Option<&ValueValidator<T>> {
        self.validator.as_ref()
    }

    /// Always fails: associations are fixed at construction.
    pub fn set<'k>(&self, token: impl Into<Token<'k>>, _value: T) -> Result<(), AssociationError> {
        Err(self.table.reject(Mutation::Set, &token.into()))
    }

    /// Always fails: associations are fixed at construction.
    pub fn remove<'k>(&self, token: impl Into<Token<'k>>) -> Result<(), AssociationError> {
        Err(self.table.reject(Mutation::Remove, &token.into()))
    }

    fn checked<'s>(&self, value: &'s T) -> Result<&'s T, AssociationError> {
        if let Some(validator) = &self.validator {
            if let Err(err) = validator.validate(value) {
                tracing::warn!(error = %err, "stored value failed validation");
                return Err(err.into());
            }
        }
        Ok(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Association<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Association")
            .field("table", &self.table)
            .field("validator", &self.validator)
            .finish()
    }
}
