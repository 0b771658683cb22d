use std::collections::HashSet;

use rule_rail::rules::Condition;
use rule_rail::traits::ValidationRule;
use rule_rail::types::RuleError;
use rule_rail::validation::{ValidationRuleSet, Validator};

#[test]
fn predicate_decides_the_outcome() {
    let rule = Condition::new(|n: &i32| n % 2 == 0, RuleError::new("must be even"));

    assert!(rule.validate(&2).is_valid());
    assert_eq!(rule.validate(&3).errors(), &[RuleError::new("must be even")]);
}

#[test]
fn predicate_can_capture_state() {
    let banned: HashSet<&str> = ["root", "admin"].into_iter().collect();
    let rule = Condition::new(move |name: &str| !banned.contains(name), "reserved name");

    assert!(rule.validate("alice").is_valid());
    assert!(rule.validate("root").is_invalid());
}

#[test]
fn predicates_work_on_slices() {
    let rule = Condition::new(|items: &[u8]| !items.is_empty(), "empty list");

    assert!(rule.validate(&[1, 2][..]).is_valid());
    assert!(rule.validate(&[][..]).is_invalid());
}

#[test]
fn closures_can_live_in_rule_sets() {
    let rules = ValidationRuleSet::<str, &'static str>::new()
        .with_rule(Condition::new(|s: &str| s.starts_with('#'), "missing #"))
        .with_rule(Condition::new(|s: &str| s.len() == 7, "wrong length"));

    assert!(Validator::validate_all(Some("#a0b1c2"), &rules).is_valid());
    assert_eq!(Validator::validate_all(Some("a0b1c2"), &rules).errors(), &["missing #", "wrong length"]);
}

#[test]
fn debug_omits_the_predicate() {
    let rule = Condition::new(|_: &str| true, "never fails");
    let debug = format!("{rule:?}");

    assert!(debug.starts_with("Condition"));
    assert!(debug.contains("never fails"));
}
