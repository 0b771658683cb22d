use core::fmt;

use crate::rules::outcome;
use crate::traits::{ValidationError, ValidationRule};
use crate::types::RuleError;
use crate::validation::ValidationResult;

/// A rule backed by an arbitrary predicate.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::Condition;
/// use rule_rail::traits::ValidationRule;
///
/// let no_spaces = Condition::new(|s: &str| !s.contains(' '), "no spaces allowed");
/// assert!(no_spaces.validate("alice").is_valid());
/// assert!(no_spaces.validate("al ice").is_invalid());
/// ```
#[derive(Clone)]
pub struct Condition<F, E = RuleError> {
    predicate: F,
    error: E,
}

impl<F, E> Condition<F, E> {
    /// Wraps `predicate`; the rule passes when it returns `true`.
    pub fn new(predicate: F, error: E) -> Self {
        Self { predicate, error }
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<T, F, E> ValidationRule<T> for Condition<F, E>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
    E: ValidationError + Clone,
{
    type Error = E;

    fn error(&self) -> &E {
        &self.error
    }

    fn validate(&self, input: &T) -> ValidationResult<E> {
        outcome((self.predicate)(input), &self.error)
    }
}

impl<F, E: fmt::Debug> fmt::Debug for Condition<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").field("error", &self.error).finish_non_exhaustive()
    }
}
