use crate::trace::{rail_debug, rail_trace};
use crate::traits::{Validatable, ValidationError, ValidationRule};
use crate::types::{ErrorVec, Failures};
use crate::validation::core::ValidationResult;
use crate::validation::rule_set::ValidationRuleSet;

/// The stateless evaluation engine.
///
/// `Validator` owns nothing. Both entry points take an optional input, borrow
/// the rule or rule set, and return one aggregate [`ValidationResult`].
/// Evaluation is synchronous and deterministic; failure is returned as data.
///
/// An absent input is treated as a failure of every rule involved, reported
/// with each rule's own error rather than a separate "missing value" kind.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{Length, Required};
/// use rule_rail::types::RuleError;
/// use rule_rail::validation::{ValidationRuleSet, Validator};
///
/// let rules = ValidationRuleSet::<str>::new()
///     .with_rule(Required::new(RuleError::new("must not be empty")))
///     .with_rule(Length::max(5, RuleError::new("at most 5 characters")));
///
/// assert!(Validator::validate_all(Some("hi"), &rules).is_valid());
///
/// let long = Validator::validate_all(Some("hello world"), &rules);
/// assert_eq!(long.errors(), &[RuleError::new("at most 5 characters")]);
///
/// let absent = Validator::validate_all(None, &rules);
/// assert_eq!(absent.errors().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Validator;

impl Validator {
    /// Evaluates a single rule.
    ///
    /// A present input is passed straight to [`ValidationRule::validate`] and
    /// its result returned unchanged. An absent input yields
    /// `Invalid([rule.error()])`.
    pub fn validate<T, R>(input: Option<&T>, rule: &R) -> ValidationResult<R::Error>
    where
        T: Validatable + ?Sized,
        R: ValidationRule<T> + ?Sized,
    {
        match input {
            Some(value) => rule.validate(value),
            None => {
                rail_debug!("input absent, failing single rule");
                rule.fail()
            },
        }
    }

    /// Evaluates every rule of a set and reduces the outcomes.
    ///
    /// - Present input: each rule runs in set order, with no short-circuit.
    ///   The result is `Valid` when all pass, otherwise `Invalid` with the
    ///   failing rules' errors in rule order.
    /// - Absent input: every rule counts as failed, giving one error per
    ///   rule in set order.
    /// - Empty set: `Valid`, whether or not the input is present.
    pub fn validate_all<T, E>(input: Option<&T>, rules: &ValidationRuleSet<T, E>) -> ValidationResult<E>
    where
        T: Validatable + ?Sized,
        E: ValidationError + Clone,
    {
        let mut errors: ErrorVec<E> = ErrorVec::new();

        match input {
            Some(value) => {
                for rule in rules {
                    let outcome = rule.validate(value);
                    rail_trace!(valid = outcome.is_valid(), "rule evaluated");
                    if let Some(failures) = outcome.into_failures() {
                        errors.extend(failures);
                    }
                }
            },
            None => errors.extend(rules.errors().cloned()),
        }

        rail_debug!(
            rules = rules.len(),
            failures = errors.len(),
            absent = input.is_none(),
            "rule set evaluated"
        );

        match Failures::try_from(errors) {
            Ok(failures) => ValidationResult::Invalid(failures),
            Err(_) => ValidationResult::Valid,
        }
    }
}
