use crate::key::CanonicalKey;
use crate::kind::ValueKind;
use serde_json::Value;
use std::any::{type_name, Any};
use std::fmt;

/// Value a caller passes to look up an entry, before resolution.
#[derive(Clone, Copy)]
pub enum Token<'a> {
    /// String key, used as-is.
    Str(&'a str),
    /// Integer key, used as-is.
    Int(i64),
    /// Borrowed object whose key is derived by a [`KeyAdapter`](crate::KeyAdapter).
    Ref {
        /// The object itself.
        object: &'a dyn Any,
        /// Concrete type name, for diagnostics.
        type_name: &'static str,
    },
    /// A value that can never be a key (null, bool, float, array).
    Unsupported(ValueKind),
}

impl<'a> Token<'a> {
    /// Wraps an object reference for adapter-based resolution.
    pub fn object<O: Any>(object: &'a O) -> Self {
        Token::Ref {
            object,
            type_name: type_name::<O>(),
        }
    }

    /// Converts a JSON value into a token.
    ///
    /// Strings and `i64` integers map to primitives, objects are handed to the
    /// adapter as a [`Value`], and every other kind is unsupported.
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Token::Str(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Token::Int(i),
                None => Token::Unsupported(ValueKind::of(value)),
            },
            Value::Object(_) => Token::Ref {
                object: value,
                type_name: "object",
            },
            other => Token::Unsupported(ValueKind::of(other)),
        }
    }

    /// Human-readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Token::Str(s) => format!("string \"{}\"", s),
            Token::Int(i) => format!("int {}", i),
            Token::Ref { type_name, .. } => format!("object {}", type_name),
            Token::Unsupported(kind) => kind.to_string(),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Token::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Token::Ref { type_name, .. } => f.debug_tuple("Ref").field(type_name).finish(),
            Token::Unsupported(kind) => f.debug_tuple("Unsupported").field(kind).finish(),
        }
    }
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(value: &'a str) -> Self {
        Token::Str(value)
    }
}

impl<'a> From<&'a String> for Token<'a> {
    fn from(value: &'a String) -> Self {
        Token::Str(value)
    }
}

impl<'a> From<&'a CanonicalKey> for Token<'a> {
    fn from(value: &'a CanonicalKey) -> Self {
        match value {
            CanonicalKey::Int(i) => Token::Int(*i),
            CanonicalKey::Str(s) => Token::Str(s),
        }
    }
}

impl<'a> From<&'a Value> for Token<'a> {
    fn from(value: &'a Value) -> Self {
        Token::from_json(value)
    }
}

macro_rules! int_token {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Token<'_> {
                fn from(value: $ty) -> Self {
                    Token::Int(i64::from(value))
                }
            }
        )*
    };
}

int_token!(i8, i16, i32, i64, u8, u16, u32);
