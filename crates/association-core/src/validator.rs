//! Predicate + label checks applied to every successful read.

use association_canonical::ValueKind;
use regex::Regex;
use serde_json::Value;
use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

use crate::instance::Instance;

/// A stored value did not satisfy the container's validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value must be of type {expected}, got {actual}")]
pub struct ValidationError {
    /// Label of the expected type.
    pub expected: String,
    /// Description of the value actually found.
    pub actual: String,
}

/// Predicate over stored values plus a human-readable type label.
///
/// The predicate is opaque; the container only calls it on read and never
/// mutates the validator.
pub struct ValueValidator<T> {
    expected: Cow<'static, str>,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    describe: fn(&T) -> String,
}

fn static_type_name<T>(_: &T) -> String {
    type_name::<T>().to_string()
}

fn json_kind(value: &Value) -> String {
    ValueKind::of(value).to_string()
}

fn instance_type(value: &Instance) -> String {
    value.type_name().to_string()
}

impl<T> ValueValidator<T> {
    /// Creates a validator from a label and a predicate.
    ///
    /// The actual-type label in errors defaults to the static type name of `T`;
    /// see [`with_describer`](Self::with_describer).
    pub fn new<F>(expected: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            expected: expected.into(),
            predicate: Box::new(predicate),
            describe: static_type_name::<T>,
        }
    }

    /// Replaces the function that describes offending values.
    pub fn with_describer(mut self, describe: fn(&T) -> String) -> Self {
        self.describe = describe;
        self
    }

    /// Label of the expected type.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Runs the predicate.
    pub fn is_valid(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Fails with [`ValidationError`] if the predicate rejects `value`.
    pub fn validate(&self, value: &T) -> Result<(), ValidationError> {
        if self.is_valid(value) {
            return Ok(());
        }
        Err(ValidationError {
            expected: self.expected.to_string(),
            actual: (self.describe)(value),
        })
    }
}

impl ValueValidator<Value> {
    /// Accepts values of exactly `kind`.
    pub fn of_kind(kind: ValueKind) -> Self {
        Self::new(kind.as_str(), move |v: &Value| ValueKind::of(v) == kind)
            .with_describer(json_kind)
    }

    /// Accepts booleans.
    pub fn boolean() -> Self {
        Self::of_kind(ValueKind::Bool)
    }

    /// Accepts strings.
    pub fn string() -> Self {
        Self::of_kind(ValueKind::String)
    }

    /// Accepts non-integral numbers.
    pub fn float() -> Self {
        Self::of_kind(ValueKind::Float)
    }

    /// Accepts integral numbers.
    pub fn integer() -> Self {
        Self::of_kind(ValueKind::Int)
    }

    /// Accepts arrays whose elements are all of `kind`.
    pub fn array_of(kind: ValueKind) -> Self {
        Self::new(format!("array<{}>", kind), move |v: &Value| {
            v.as_array()
                .map(|items| items.iter().all(|item| ValueKind::of(item) == kind))
                .unwrap_or(false)
        })
        .with_describer(|v| match v.as_array() {
            Some(items) => {
                let kinds: Vec<&str> = items.iter().map(|i| ValueKind::of(i).as_str()).collect();
                format!("array[{}]", kinds.join(", "))
            }
            None => json_kind(v),
        })
    }

    /// Accepts strings matching `pattern`.
    pub fn matching(pattern: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(pattern)?;
        let label = format!("string matching /{}/", pattern);
        Ok(Self::new(label, move |v: &Value| {
            v.as_str().map(|s| re.is_match(s)).unwrap_or(false)
        })
        .with_describer(|v| match v.as_str() {
            Some(s) => format!("string \"{}\"", s),
            None => json_kind(v),
        }))
    }
}

impl ValueValidator<Instance> {
    /// Accepts instances whose concrete type is `X`.
    pub fn instance_of<X: Any>() -> Self {
        Self::new(type_name::<X>(), |v: &Instance| v.is::<X>()).with_describer(instance_type)
    }
}

impl<T> fmt::Debug for ValueValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueValidator")
            .field("expected", &self.expected)
            .finish()
    }
}
