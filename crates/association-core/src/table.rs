use association_canonical::{CanonicalKey, KeyAdapter, KeyResolver, Token};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::{AssociationError, Mutation};

/// Fixed key → entry table shared by both containers.
#[derive(Debug, Clone)]
pub(crate) struct KeyedTable<V> {
    entries: BTreeMap<CanonicalKey, V>,
    resolver: KeyResolver,
}

impl<V> KeyedTable<V> {
    pub(crate) fn build<K, I>(entries: I, adapter: Option<Arc<dyn KeyAdapter>>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<CanonicalKey>,
    {
        // Later duplicates overwrite earlier ones.
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            entries,
            resolver: KeyResolver::new(adapter),
        }
    }

    /// Resolves `token` and returns the key with its entry, if present.
    pub(crate) fn lookup(
        &self,
        token: &Token<'_>,
    ) -> Result<(CanonicalKey, Option<&V>), AssociationError> {
        let key = self.resolver.resolve(token)?;
        let entry = self.entries.get(&key);
        if entry.is_none() {
            tracing::trace!(key = %key, "association miss");
        }
        Ok((key, entry))
    }

    pub(crate) fn contains(&self, token: &Token<'_>) -> Result<bool, AssociationError> {
        let key = self.resolver.resolve(token)?;
        Ok(self.entries.contains_key(&key))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &CanonicalKey> {
        self.entries.keys()
    }

    pub(crate) fn has_adapter(&self) -> bool {
        self.resolver.has_adapter()
    }

    pub(crate) fn reject(&self, operation: Mutation, token: &Token<'_>) -> AssociationError {
        tracing::warn!(
            %operation,
            token = %token.describe(),
            "rejected mutation of read-only association"
        );
        AssociationError::Immutable { operation }
    }
}
