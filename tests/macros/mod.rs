use rule_rail::rule_set;
use rule_rail::rules::{Comparison, Condition, Length, Required};
use rule_rail::types::RuleError;
use rule_rail::validation::{ValidationRuleSet, Validator};

#[test]
fn empty_rule_set() {
    let rules: ValidationRuleSet<str> = rule_set![];

    assert!(rules.is_empty());
    assert!(Validator::validate_all(None, &rules).is_valid());
}

#[test]
fn rules_keep_listed_order() {
    let rules: ValidationRuleSet<str, &'static str> = rule_set![
        Required::new("required"),
        Length::min(3, "too short"),
        Condition::new(|s: &str| s.is_ascii(), "ascii only"),
    ];

    assert_eq!(rules.len(), 3);
    assert_eq!(rules.errors().copied().collect::<Vec<_>>(), ["required", "too short", "ascii only"]);
    assert_eq!(Validator::validate_all(Some("é"), &rules).errors(), &["too short", "ascii only"]);
}

#[test]
fn input_type_is_inferred_from_use() {
    let rules = rule_set![Comparison::range(1_u16, 65535, RuleError::new("invalid port"))];

    assert!(Validator::validate_all(Some(&8080_u16), &rules).is_valid());
    assert!(Validator::validate_all(Some(&0_u16), &rules).is_invalid());
}

#[test]
fn single_rule_without_trailing_comma() {
    let rules: ValidationRuleSet<str> = rule_set![Required::new(RuleError::new("required"))];
    assert_eq!(rules.len(), 1);
}
