use association_canonical::{
    adapter_fn, CanonicalKey, ChainAdapter, ConfigurationError, JsonFieldAdapter, KeyResolver,
    Token, ValueKind,
};
use serde_json::json;
use std::sync::Arc;

struct User {
    id: i64,
}

struct Slug(&'static str);

struct Unrelated;

fn user_resolver() -> KeyResolver {
    KeyResolver::with_adapter(Arc::new(adapter_fn(|u: &User| u.id)))
}

#[test]
fn primitives_pass_through_unchanged() {
    let resolver = KeyResolver::primitive_only();
    assert_eq!(
        resolver.resolve(&Token::from("a")).unwrap(),
        CanonicalKey::Str("a".into())
    );
    assert_eq!(
        resolver.resolve(&Token::from(42i64)).unwrap(),
        CanonicalKey::Int(42)
    );
    assert_eq!(
        resolver.resolve(&Token::from(7u32)).unwrap(),
        CanonicalKey::Int(7)
    );
}

#[test]
fn numeric_strings_are_not_coerced() {
    let resolver = KeyResolver::primitive_only();
    let key = resolver.resolve(&Token::from("1")).unwrap();
    assert_eq!(key, CanonicalKey::Str("1".into()));
    assert_ne!(key, CanonicalKey::Int(1));
}

#[test]
fn object_without_adapter_is_configuration_error() {
    let resolver = KeyResolver::primitive_only();
    let user = User { id: 1 };
    let err = resolver.resolve(&Token::object(&user)).unwrap_err();
    match err {
        ConfigurationError::MissingAdapter { type_name } => {
            assert!(type_name.ends_with("User"));
        }
        other => panic!("Expected MissingAdapter, got {:?}", other),
    }
}

#[test]
fn object_with_adapter_resolves_through_it() {
    let resolver = user_resolver();
    let user = User { id: 9 };
    assert!(resolver.has_adapter());
    assert_eq!(
        resolver.resolve(&Token::object(&user)).unwrap(),
        CanonicalKey::Int(9)
    );
}

#[test]
fn adapter_declining_object_is_configuration_error() {
    let resolver = user_resolver();
    let err = resolver.resolve(&Token::object(&Unrelated)).unwrap_err();
    assert!(matches!(err, ConfigurationError::UnresolvableObject { .. }));
    assert!(err.to_string().contains("Unrelated"));
}

#[test]
fn unsupported_json_tokens_are_rejected() {
    let resolver = KeyResolver::with_adapter(Arc::new(JsonFieldAdapter::new("id")));
    for (value, kind) in [
        (json!([1, 2]), ValueKind::Array),
        (json!(null), ValueKind::Null),
        (json!(true), ValueKind::Bool),
        (json!(1.5), ValueKind::Float),
    ] {
        let err = resolver.resolve(&Token::from(&value)).unwrap_err();
        assert_eq!(err, ConfigurationError::UnsupportedToken { kind });
    }
}

#[test]
fn json_tokens_map_to_primitives() {
    let resolver = KeyResolver::primitive_only();
    let s = json!("a");
    let i = json!(3);
    assert_eq!(resolver.resolve(&Token::from(&s)).unwrap(), CanonicalKey::from("a"));
    assert_eq!(resolver.resolve(&Token::from(&i)).unwrap(), CanonicalKey::Int(3));
}

#[test]
fn json_field_adapter_reads_string_and_int_fields() {
    let resolver = KeyResolver::with_adapter(Arc::new(JsonFieldAdapter::new("id")));
    let by_string = json!({ "id": "alice", "name": "Alice" });
    let by_int = json!({ "id": 12 });
    let missing = json!({ "name": "nobody" });

    assert_eq!(
        resolver.resolve(&Token::from(&by_string)).unwrap(),
        CanonicalKey::from("alice")
    );
    assert_eq!(
        resolver.resolve(&Token::from(&by_int)).unwrap(),
        CanonicalKey::Int(12)
    );
    assert!(matches!(
        resolver.resolve(&Token::from(&missing)),
        Err(ConfigurationError::UnresolvableObject { type_name: "object" })
    ));
}

#[test]
fn chain_adapter_tries_in_order() {
    let chain = ChainAdapter::new()
        .with(adapter_fn(|u: &User| u.id))
        .with(adapter_fn(|s: &Slug| s.0));
    let resolver = KeyResolver::with_adapter(Arc::new(chain));

    assert_eq!(
        resolver.resolve(&Token::object(&User { id: 5 })).unwrap(),
        CanonicalKey::Int(5)
    );
    assert_eq!(
        resolver.resolve(&Token::object(&Slug("home"))).unwrap(),
        CanonicalKey::from("home")
    );
    assert!(resolver.resolve(&Token::object(&Unrelated)).is_err());
}

#[test]
fn canonical_key_serializes_untagged() {
    assert_eq!(serde_json::to_string(&CanonicalKey::from("a")).unwrap(), r#""a""#);
    assert_eq!(serde_json::to_string(&CanonicalKey::Int(1)).unwrap(), "1");
    let key: CanonicalKey = serde_json::from_str("17").unwrap();
    assert_eq!(key, CanonicalKey::Int(17));
}

#[test]
fn canonical_keys_order_integers_before_strings() {
    let mut keys = vec![
        CanonicalKey::from("b"),
        CanonicalKey::Int(2),
        CanonicalKey::from("a"),
        CanonicalKey::Int(-1),
    ];
    keys.sort();
    assert_eq!(
        keys,
        vec![
            CanonicalKey::Int(-1),
            CanonicalKey::Int(2),
            CanonicalKey::from("a"),
            CanonicalKey::from("b"),
        ]
    );
    assert_eq!(CanonicalKey::Int(2).to_string(), "2");
}
