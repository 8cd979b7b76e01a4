use association_core::{
    AssociationError, Associations, ConfigurationError, Fallback, JsonFieldAdapter, KeyAdapter,
    Mutation, Token,
};
use serde_json::json;
use std::sync::Arc;

fn make_teams() -> Associations<&'static str> {
    let adapter: Arc<dyn KeyAdapter> = Arc::new(JsonFieldAdapter::new("team"));
    Associations::with_adapter(
        [("eng", vec!["ann", "bo"]), ("ops", vec!["cy"])],
        Some(adapter),
    )
}

#[test]
fn test_sequence_round_trip() {
    let numbers = Associations::new([("a", vec![1, 2, 3])]);
    assert_eq!(numbers.at("a").unwrap(), &[1, 2, 3]);
    let got: &[i32] = numbers.get("a", Fallback::Omitted).unwrap();
    assert_eq!(got, &[1, 2, 3]);
    assert!(!numbers.contains("b").unwrap());
    assert_eq!(numbers.len(), 1);
}

#[test]
fn test_empty_sequence_is_a_present_value() {
    let tags = Associations::<String>::new([("untagged", Vec::new())]);
    assert!(tags.contains("untagged").unwrap());
    assert!(tags.at("untagged").unwrap().is_empty());
}

#[test]
fn test_absent_key_three_way_branch() {
    let numbers = Associations::new([("a", vec![1, 2, 3])]);

    // An explicit empty default is still a default.
    let empty: &[i32] = &[];
    assert_eq!(numbers.get_or("b", empty).unwrap(), empty);

    let owned: Vec<i32> = numbers.get("b", Fallback::Given(Vec::new())).unwrap();
    assert!(owned.is_empty());

    let none: Option<&[i32]> = numbers.get("b", Fallback::Given(None)).unwrap();
    assert!(none.is_none());
    assert!(numbers.try_get("b").unwrap().is_none());

    let missing: Result<&[i32], _> = numbers.get("b", Fallback::Omitted);
    assert!(matches!(missing, Err(AssociationError::NotFound { .. })));
}

#[test]
fn test_owned_default_copies_present_sequence() {
    let numbers = Associations::new([("a", vec![1, 2, 3])]);
    let owned: Vec<i32> = numbers.get("a", Fallback::Given(vec![9])).unwrap();
    assert_eq!(owned, vec![1, 2, 3]);
}

#[test]
fn test_json_object_token_resolves_through_field() {
    let teams = make_teams();
    let member = json!({ "name": "dee", "team": "eng" });
    assert_eq!(teams.at(&member).unwrap(), teams.at("eng").unwrap());

    let orphan = json!({ "name": "eve" });
    assert!(matches!(
        teams.contains(&orphan),
        Err(AssociationError::Configuration(
            ConfigurationError::UnresolvableObject { .. }
        ))
    ));
}

#[test]
fn test_object_token_without_adapter_fails() {
    let numbers = Associations::new([("a", vec![1])]);
    let obj = json!({ "team": "a" });
    for err in [
        numbers.at(&obj).unwrap_err(),
        numbers.contains(&obj).unwrap_err(),
        numbers.try_get(&obj).unwrap_err(),
    ] {
        assert!(matches!(
            err,
            AssociationError::Configuration(ConfigurationError::MissingAdapter { .. })
        ));
    }
}

#[test]
fn test_mutation_is_rejected() {
    let teams = make_teams();
    assert_eq!(
        teams.set("eng", vec!["zed"]).unwrap_err(),
        AssociationError::Immutable {
            operation: Mutation::Set
        }
    );
    assert_eq!(
        teams.remove(Token::from("ops")).unwrap_err(),
        AssociationError::Immutable {
            operation: Mutation::Remove
        }
    );
    assert_eq!(teams.len(), 2);
    assert_eq!(teams.at("eng").unwrap(), &["ann", "bo"]);
    assert_eq!(teams.at("ops").unwrap(), &["cy"]);
}

#[test]
fn test_integer_keys() {
    let by_year = Associations::new([(2023, vec!["a"]), (2024, vec!["b", "c"])]);
    assert_eq!(by_year.at(2024).unwrap().len(), 2);
    let keys: Vec<_> = by_year.keys().cloned().collect();
    assert_eq!(keys[0].as_int(), Some(2023));
}
