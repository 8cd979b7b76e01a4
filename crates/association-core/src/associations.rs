use association_canonical::{CanonicalKey, KeyAdapter, Token};
use std::sync::Arc;

use crate::errors::{AssociationError, Mutation};
use crate::fallback::Fallback;
use crate::table::KeyedTable;

/// Read-only map from canonical key to a sequence of values.
///
/// Sequences are returned exactly as stored; there is no per-value
/// validation.
#[derive(Debug, Clone)]
pub struct Associations<T> {
    table: KeyedTable<Vec<T>>,
}

impl<T> Associations<T> {
    /// Builds associations over primitive keys only.
    pub fn new<K, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<CanonicalKey>,
    {
        Self::with_adapter(entries, None)
    }

    /// Builds associations with an optional key adapter.
    pub fn with_adapter<K, I>(entries: I, adapter: Option<Arc<dyn KeyAdapter>>) -> Self
    where
        I: IntoIterator<Item = (K, Vec<T>)>,
        K: Into<CanonicalKey>,
    {
        let table = KeyedTable::build(entries, adapter);
        tracing::debug!(
            entries = table.len(),
            adapter = table.has_adapter(),
            "built associations"
        );
        Self { table }
    }

    /// Looks up `token`, falling back to `fallback` when the key is absent.
    ///
    /// Same three-way rule as [`Association::get`](crate::Association::get):
    /// an explicitly given default is returned even when it is an empty
    /// slice or `None`; an omitted one turns a miss into `NotFound`.
    pub fn get<'s, 'k, D>(
        &'s self,
        token: impl Into<Token<'k>>,
        fallback: Fallback<D>,
    ) -> Result<D, AssociationError>
    where
        D: From<&'s [T]>,
    {
        match self.table.lookup(&token.into())? {
            (_, Some(values)) => Ok(D::from(values.as_slice())),
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
        default: &'s [T],
    ) -> Result<&'s [T], AssociationError> {
        self.get(token, Fallback::Given(default))
    }

    /// Looks up `token`, returning `None` when the key is absent.
    pub fn try_get<'k>(
        &self,
        token: impl Into<Token<'k>>,
    ) -> Result<Option<&[T]>, AssociationError> {
        self.get(token, Fallback::Given(None))
    }

    /// Indexed read: the stored sequence, or `NotFound`.
    pub fn at<'k>(&self, token: impl Into<Token<'k>>) -> Result<&[T], AssociationError> {
        match self.table.lookup(&token.into())? {
            (_, Some(values)) => Ok(values.as_slice()),
            (key, None) => Err(AssociationError::NotFound { key }),
        }
    }

    /// Whether `token` resolves to a present key.
    pub fn contains<'k>(&self, token: impl Into<Token<'k>>) -> Result<bool, AssociationError> {
        self.table.contains(&token.into())
    }

    /// Number of keys (not values).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether there are no keys.
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

    /// Always fails: associations are fixed at construction.
    pub fn set<'k>(
        &self,
        token: impl Into<Token<'k>>,
        _values: Vec<T>,
    ) -> Result<(), AssociationError> {
        Err(self.table.reject(Mutation::Set, &token.into()))
    }

    /// Always fails: associations are fixed at construction.
    pub fn remove<'k>(&self, token: impl Into<Token<'k>>) -> Result<(), AssociationError> {
        Err(self.table.reject(Mutation::Remove, &token.into()))
    }
}
