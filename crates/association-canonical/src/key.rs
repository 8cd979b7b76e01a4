use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized key under which a container stores its entries.
///
/// Strings are never coerced to integers: `"1"` and `1` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CanonicalKey {
    /// Signed 64-bit integer key.
    Int(i64),
    /// String key.
    Str(String),
}

impl CanonicalKey {
    /// Returns the string form if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CanonicalKey::Str(s) => Some(s),
            CanonicalKey::Int(_) => None,
        }
    }

    /// Returns the integer form if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CanonicalKey::Int(i) => Some(*i),
            CanonicalKey::Str(_) => None,
        }
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalKey::Int(i) => write!(f, "{}", i),
            CanonicalKey::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CanonicalKey {
    fn from(value: &str) -> Self {
        CanonicalKey::Str(value.to_string())
    }
}

impl From<String> for CanonicalKey {
    fn from(value: String) -> Self {
        CanonicalKey::Str(value)
    }
}

impl From<&String> for CanonicalKey {
    fn from(value: &String) -> Self {
        CanonicalKey::Str(value.clone())
    }
}

macro_rules! int_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CanonicalKey {
                fn from(value: $ty) -> Self {
                    CanonicalKey::Int(i64::from(value))
                }
            }
        )*
    };
}

int_key!(i8, i16, i32, i64, u8, u16, u32);
