use rule_rail::validation::ValidationResult;

#[test]
fn iter_errors_on_valid_is_empty() {
    let result = ValidationResult::<&str>::valid();
    let mut iter = result.iter_errors();

    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_errors_exposes_all_errors_and_len() {
    let result = ValidationResult::invalid(["a", "b", "c"]).unwrap();
    let mut iter = result.iter_errors();

    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&"a"));
    assert_eq!(iter.next_back(), Some(&"c"));
    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&"b"));
    assert_eq!(iter.next(), None);
}

#[test]
fn borrowed_into_iterator_matches_iter_errors() {
    let result = ValidationResult::invalid(["x", "y"]).unwrap();

    let mut seen = Vec::new();
    for error in &result {
        seen.push(*error);
    }
    assert_eq!(seen, ["x", "y"]);
}

#[test]
fn owned_into_iterator_yields_errors() {
    let result = ValidationResult::invalid([String::from("x"), String::from("y")]).unwrap();
    let errors: Vec<String> = result.into_iter().collect();
    assert_eq!(errors, ["x".to_string(), "y".to_string()]);

    assert_eq!(ValidationResult::<String>::valid().into_iter().count(), 0);
}

#[test]
fn collecting_results_concatenates_errors_in_order() {
    let results = [
        ValidationResult::failure("first"),
        ValidationResult::valid(),
        ValidationResult::invalid(["second", "third"]).unwrap(),
    ];

    let collected: ValidationResult<&str> = results.into_iter().collect();
    assert_eq!(collected.errors(), &["first", "second", "third"]);
}

#[test]
fn collecting_only_valid_results_is_valid() {
    let collected: ValidationResult<&str> =
        [ValidationResult::valid(), ValidationResult::valid()].into_iter().collect();
    assert!(collected.is_valid());

    let empty: ValidationResult<&str> = Vec::new().into_iter().collect();
    assert!(empty.is_valid());
}
