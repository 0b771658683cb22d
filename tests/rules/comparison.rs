use rule_rail::rules::Comparison;
use rule_rail::traits::ValidationRule;
use rule_rail::types::RuleError;

#[test]
fn range_is_inclusive_on_both_ends() {
    let rule = Comparison::range(1, 10, "out of range");

    assert!(rule.validate(&0).is_invalid());
    assert!(rule.validate(&1).is_valid());
    assert!(rule.validate(&10).is_valid());
    assert!(rule.validate(&11).is_invalid());
}

#[test]
fn one_sided_bounds() {
    let at_least = Comparison::at_least(18_u8, "too young");
    assert!(at_least.validate(&17).is_invalid());
    assert!(at_least.validate(&u8::MAX).is_valid());
    assert_eq!(at_least.min(), Some(&18));
    assert_eq!(at_least.max(), None);

    let at_most = Comparison::at_most(-1_i64, "must be negative");
    assert!(at_most.validate(&-5).is_valid());
    assert!(at_most.validate(&0).is_invalid());
}

#[test]
fn unordered_floats_fail() {
    let rule = Comparison::range(0.0_f64, 1.0, RuleError::new("not a ratio"));

    assert!(rule.validate(&0.5).is_valid());
    assert!(rule.validate(&f64::NAN).is_invalid());
    assert!(rule.validate(&f64::INFINITY).is_invalid());
}

#[test]
fn works_for_any_partial_ord_type() {
    let rule = Comparison::range(String::from("b"), String::from("d"), "out of range");

    assert!(rule.validate(&String::from("c")).is_valid());
    assert!(rule.validate(&String::from("a")).is_invalid());
}
