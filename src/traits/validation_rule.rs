use crate::traits::ValidationError;
use crate::types::alloc_type::{Arc, Box};
use crate::validation::ValidationResult;

/// Marker for any type that may serve as rule input.
///
/// There is no behavioral contract; every type qualifies.
pub trait Validatable {}

impl<T: ?Sized> Validatable for T {}

/// A single predicate over a typed input, paired with a failure descriptor.
///
/// Implementations must be pure functions of their input: no hidden state and
/// no side effects. On failure a rule reports exactly one error, its own
/// [`error`](ValidationRule::error). That single-error contract is what lets
/// the [`Validator`](crate::validation::Validator) build a deterministic,
/// ordered error list for a whole rule set.
///
/// The input type may be unsized, so a rule can be written once for `str`
/// or `[T]`.
///
/// # Examples
///
/// ```
/// use rule_rail::traits::ValidationRule;
/// use rule_rail::types::RuleError;
/// use rule_rail::validation::ValidationResult;
///
/// struct Even {
///     error: RuleError,
/// }
///
/// impl ValidationRule<i64> for Even {
///     type Error = RuleError;
///
///     fn error(&self) -> &RuleError {
///         &self.error
///     }
///
///     fn validate(&self, input: &i64) -> ValidationResult<RuleError> {
///         self.check(input % 2 == 0)
///     }
/// }
///
/// let rule = Even { error: RuleError::new("must be even") };
/// assert!(rule.validate(&4).is_valid());
/// assert_eq!(rule.validate(&3).errors(), &[RuleError::new("must be even")]);
/// ```
pub trait ValidationRule<T: Validatable + ?Sized> {
    type Error: ValidationError + Clone;

    /// The descriptor reported whenever this rule fails.
    fn error(&self) -> &Self::Error;

    /// Tests `input`, returning `Valid` or `Invalid([self.error()])`.
    fn validate(&self, input: &T) -> ValidationResult<Self::Error>;

    /// This rule's failure: `Invalid` carrying a copy of its error.
    #[inline]
    fn fail(&self) -> ValidationResult<Self::Error> {
        ValidationResult::failure(self.error().clone())
    }

    /// Maps a predicate outcome onto this rule's result.
    #[inline]
    fn check(&self, holds: bool) -> ValidationResult<Self::Error> {
        if holds {
            ValidationResult::Valid
        } else {
            self.fail()
        }
    }
}

impl<T, R> ValidationRule<T> for &R
where
    T: ?Sized,
    R: ValidationRule<T> + ?Sized,
{
    type Error = R::Error;

    #[inline]
    fn error(&self) -> &Self::Error {
        (**self).error()
    }

    #[inline]
    fn validate(&self, input: &T) -> ValidationResult<Self::Error> {
        (**self).validate(input)
    }
}

impl<T, R> ValidationRule<T> for Box<R>
where
    T: ?Sized,
    R: ValidationRule<T> + ?Sized,
{
    type Error = R::Error;

    #[inline]
    fn error(&self) -> &Self::Error {
        (**self).error()
    }

    #[inline]
    fn validate(&self, input: &T) -> ValidationResult<Self::Error> {
        (**self).validate(input)
    }
}

impl<T, R> ValidationRule<T> for Arc<R>
where
    T: ?Sized,
    R: ValidationRule<T> + ?Sized,
{
    type Error = R::Error;

    #[inline]
    fn error(&self) -> &Self::Error {
        (**self).error()
    }

    #[inline]
    fn validate(&self, input: &T) -> ValidationResult<Self::Error> {
        (**self).validate(input)
    }
}
