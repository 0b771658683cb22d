use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use rule_rail::rules::{Comparison, Condition, Length, Required};
use rule_rail::traits::ValidationRule;
use rule_rail::types::RuleError;
use rule_rail::validation::{ValidationResult, ValidationRuleSet, Validator};

/// Counts how many times it runs and fails when `fails` is set.
struct Counting {
    calls: Arc<AtomicUsize>,
    fails: bool,
    error: &'static str,
}

impl Counting {
    fn new(calls: &Arc<AtomicUsize>, fails: bool, error: &'static str) -> Self {
        Self { calls: Arc::clone(calls), fails, error }
    }
}

impl ValidationRule<str> for Counting {
    type Error = &'static str;

    fn error(&self) -> &&'static str {
        &self.error
    }

    fn validate(&self, _input: &str) -> ValidationResult<&'static str> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.check(!self.fails)
    }
}

fn username_rules() -> ValidationRuleSet<str> {
    ValidationRuleSet::new()
        .with_rule(Required::new(RuleError::new("must not be empty")))
        .with_rule(Length::max(5, RuleError::new("at most 5 characters")))
}

#[test]
fn single_rule_with_present_input_passes_through() {
    let rule = Length::max(3, "too long");

    for input in ["", "abc", "abcd", "hello world"] {
        assert_eq!(Validator::validate(Some(input), &rule), rule.validate(input));
    }
}

#[test]
fn single_rule_with_absent_input_fails_with_rule_error() {
    let rule = Comparison::at_least(1_u32, RuleError::new("must be positive").with_code("min"));

    let result = Validator::validate(None, &rule);
    assert_eq!(result.errors(), &[RuleError::new("must be positive").with_code("min")]);
}

#[test]
fn single_rule_accepts_trait_objects() {
    let rule: Box<dyn ValidationRule<str, Error = &'static str>> = Box::new(Required::new("required"));

    assert!(Validator::validate(Some("x"), &rule).is_valid());
    assert!(Validator::validate(Some(""), rule.as_ref()).is_invalid());
}

#[test]
fn username_scenario() {
    let rules = username_rules();

    let long = Validator::validate_all(Some("hello world"), &rules);
    assert_eq!(long.errors(), &[RuleError::new("at most 5 characters")]);

    // Empty text satisfies the length bound, so only `Required` fails.
    let empty = Validator::validate_all(Some(""), &rules);
    assert_eq!(empty.errors(), &[RuleError::new("must not be empty")]);

    assert!(Validator::validate_all(Some("hi"), &rules).is_valid());

    let absent = Validator::validate_all(None, &rules);
    assert_eq!(
        absent.errors(),
        &[RuleError::new("must not be empty"), RuleError::new("at most 5 characters")]
    );
}

#[test]
fn absent_input_reports_every_rule_in_order() {
    let rules = ValidationRuleSet::<str, &'static str>::new()
        .with_rule(Required::new("a"))
        .with_rule(Length::min(1, "b"))
        .with_rule(Required::new("a"))
        .with_rule(Condition::new(|_: &str| true, "c"));

    let result = Validator::validate_all(None, &rules);
    assert_eq!(result.errors(), &["a", "b", "a", "c"]);
}

#[test]
fn absent_input_does_not_run_rules() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rules = ValidationRuleSet::new()
        .with_rule(Counting::new(&calls, false, "one"))
        .with_rule(Counting::new(&calls, false, "two"));

    assert_eq!(Validator::validate_all(None, &rules).errors(), &["one", "two"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn empty_set_is_always_valid() {
    let rules = ValidationRuleSet::<str>::new();

    assert!(Validator::validate_all(Some("anything"), &rules).is_valid());
    assert!(Validator::validate_all(None, &rules).is_valid());
}

#[test]
fn every_rule_runs_even_after_a_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let rules = ValidationRuleSet::new()
        .with_rule(Counting::new(&calls, true, "first"))
        .with_rule(Counting::new(&calls, false, "second"))
        .with_rule(Counting::new(&calls, true, "third"));

    let result = Validator::validate_all(Some("input"), &rules);

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(result.errors(), &["first", "third"]);
}

#[test]
fn all_passing_rules_give_valid() {
    let rules = ValidationRuleSet::<u32, &'static str>::new()
        .with_rule(Comparison::at_least(1, "too small"))
        .with_rule(Comparison::at_most(10, "too big"))
        .with_rule(Condition::new(|n: &u32| n % 2 == 0, "must be even"));

    assert!(Validator::validate_all(Some(&4), &rules).is_valid());
    assert_eq!(Validator::validate_all(Some(&11), &rules).errors(), &["too big", "must be even"]);
}

#[test]
fn set_result_equals_merge_of_single_results() {
    let rules = ValidationRuleSet::<str, &'static str>::new()
        .with_rule(Required::new("required"))
        .with_rule(Length::range(2, 4, "length"))
        .with_rule(Condition::new(|s: &str| s.is_ascii(), "ascii"));

    for input in ["", "a", "ab", "abcde", "héllo", "ok"] {
        let merged = rules
            .iter()
            .map(|rule| Validator::validate(Some(input), rule))
            .fold(ValidationResult::valid(), ValidationResult::merge);
        assert_eq!(Validator::validate_all(Some(input), &rules), merged, "input {input:?}");
    }
}

#[test]
fn evaluating_combined_sets_is_associative() {
    let a = ValidationRuleSet::<str, &'static str>::new().with_rule(Required::new("a"));
    let b = ValidationRuleSet::<str, &'static str>::new().with_rule(Length::min(3, "b"));
    let c = ValidationRuleSet::<str, &'static str>::new().with_rule(Length::max(0, "c"));

    let left = a.combine(&b).combine(&c);
    let right = a.combine(&b.combine(&c));

    for input in [None, Some(""), Some("ab"), Some("abcd")] {
        assert_eq!(Validator::validate_all(input, &left), Validator::validate_all(input, &right));
    }
    assert_eq!(Validator::validate_all(Some(""), &left).errors(), &["a", "b"]);
}

#[test]
fn evaluation_is_deterministic() {
    let rules = username_rules();

    let first = Validator::validate_all(Some("hello world"), &rules);
    let second = Validator::validate_all(Some("hello world"), &rules);
    assert_eq!(first, second);
}

#[test]
fn rule_sets_can_be_shared_across_threads() {
    let rules = Arc::new(username_rules());

    let handles: Vec<_> = ["hi", "", "hello world", "abc"]
        .into_iter()
        .map(|input| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || Validator::validate_all(Some(input), &rules).errors().len())
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, [0, 1, 1, 0]);
}

#[test]
fn extending_a_clone_does_not_affect_evaluation_of_the_original() {
    let original = username_rules();
    let mut stricter = original.clone();
    stricter.add(Length::min(3, RuleError::new("at least 3 characters")));

    assert!(Validator::validate_all(Some("hi"), &original).is_valid());
    assert_eq!(
        Validator::validate_all(Some("hi"), &stricter).errors(),
        &[RuleError::new("at least 3 characters")]
    );
}
