use crate::key::CanonicalKey;
use serde_json::Value;
use std::any::Any;
use std::marker::PhantomData;

/// Capability deriving a canonical key from an object token.
pub trait KeyAdapter: Send + Sync {
    /// Returns the key for `object`, or `None` if this adapter does not
    /// handle it.
    fn key_of(&self, object: &dyn Any) -> Option<CanonicalKey>;
}

/// Adapter that downcasts to `O` and applies a closure.
pub struct FnAdapter<O, K, F> {
    derive: F,
    _marker: PhantomData<fn(&O) -> K>,
}

impl<O, K, F> FnAdapter<O, K, F>
where
    O: Any,
    K: Into<CanonicalKey>,
    F: Fn(&O) -> K + Send + Sync,
{
    /// Creates a new closure adapter.
    pub fn new(derive: F) -> Self {
        Self {
            derive,
            _marker: PhantomData,
        }
    }
}

impl<O, K, F> KeyAdapter for FnAdapter<O, K, F>
where
    O: Any,
    K: Into<CanonicalKey>,
    F: Fn(&O) -> K + Send + Sync,
{
    fn key_of(&self, object: &dyn Any) -> Option<CanonicalKey> {
        object
            .downcast_ref::<O>()
            .map(|o| (self.derive)(o).into())
    }
}

/// Shorthand for [`FnAdapter::new`].
pub fn adapter_fn<O, K, F>(derive: F) -> FnAdapter<O, K, F>
where
    O: Any,
    K: Into<CanonicalKey>,
    F: Fn(&O) -> K + Send + Sync,
{
    FnAdapter::new(derive)
}

/// Derives keys from a field of a JSON object token.
#[derive(Debug, Clone)]
pub struct JsonFieldAdapter {
    /// Field holding the key; must be a string or an `i64` integer.
    pub field: String,
}

impl JsonFieldAdapter {
    /// Creates an adapter reading `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl KeyAdapter for JsonFieldAdapter {
    fn key_of(&self, object: &dyn Any) -> Option<CanonicalKey> {
        match object.downcast_ref::<Value>()?.get(&self.field)? {
            Value::String(s) => Some(CanonicalKey::Str(s.clone())),
            Value::Number(n) => n.as_i64().map(CanonicalKey::Int),
            _ => None,
        }
    }
}

/// Composite adapter: the first adapter that yields a key wins.
#[derive(Default)]
pub struct ChainAdapter {
    /// Adapters tried in order.
    pub adapters: Vec<Box<dyn KeyAdapter>>,
}

impl ChainAdapter {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an adapter to the chain.
    pub fn with(mut self, adapter: impl KeyAdapter + 'static) -> Self {
        self.adapters.push(Box::new(adapter));
        self
    }
}

impl KeyAdapter for ChainAdapter {
    fn key_of(&self, object: &dyn Any) -> Option<CanonicalKey> {
        self.adapters.iter().find_map(|a| a.key_of(object))
    }
}
