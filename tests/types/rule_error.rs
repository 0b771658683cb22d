use std::borrow::Cow;

use rule_rail::traits::ValidationError;
use rule_rail::types::RuleError;

#[test]
fn message_only() {
    let err = RuleError::new("must not be empty");

    assert_eq!(err.message(), "must not be empty");
    assert_eq!(err.code(), None);
    assert_eq!(err.to_string(), "must not be empty");
}

#[test]
fn message_with_code() {
    let err = RuleError::new("too long").with_code("max_length");

    assert_eq!(err.code(), Some("max_length"));
    assert_eq!(err.to_string(), "too long (max_length)");
}

#[test]
fn accepts_owned_and_borrowed_text() {
    let limit = 5;
    let owned = RuleError::new(format!("at most {limit} characters"));
    let borrowed = RuleError::from("static");
    let from_string = RuleError::from(String::from("dynamic"));

    assert_eq!(owned.message(), "at most 5 characters");
    assert_eq!(borrowed.message(), "static");
    assert_eq!(from_string.message(), "dynamic");
}

#[test]
fn implements_validation_error() {
    let err = RuleError::new("bad").with_code("b");

    assert_eq!(ValidationError::message(&err), Cow::Borrowed("bad"));
    assert_eq!(ValidationError::code(&err), Some("b"));
}

#[test]
fn equality_includes_code() {
    assert_eq!(RuleError::new("x"), RuleError::new("x"));
    assert_ne!(RuleError::new("x"), RuleError::new("x").with_code("c"));
}

#[test]
#[cfg(feature = "std")]
fn is_a_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&RuleError::new("x"));
}

#[test]
#[cfg(feature = "serde")]
fn serde_skips_missing_code() {
    let json = serde_json::to_string(&RuleError::new("x")).unwrap();
    assert_eq!(json, r#"{"message":"x"}"#);

    let with_code: RuleError = serde_json::from_str(r#"{"message":"y","code":"c"}"#).unwrap();
    assert_eq!(with_code, RuleError::new("y").with_code("c"));
}
