use crate::rules::outcome;
use crate::traits::{ValidationError, ValidationRule};
use crate::types::RuleError;
use crate::validation::ValidationResult;

/// Text input must not be empty.
///
/// By default any character counts, so `" "` passes; [`trimmed`] makes
/// whitespace-only input fail as well. An absent value is the engine's
/// concern: the [`Validator`](crate::validation::Validator) fails it with this
/// rule's error before the rule ever runs.
///
/// [`trimmed`]: Required::trimmed
///
/// # Examples
///
/// ```
/// use rule_rail::rules::Required;
/// use rule_rail::traits::ValidationRule;
///
/// let rule = Required::new("required");
/// assert!(rule.validate("x").is_valid());
/// assert!(rule.validate("").is_invalid());
/// assert!(rule.validate("  ").is_valid());
/// assert!(rule.trimmed().validate("  ").is_invalid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required<E = RuleError> {
    error: E,
    trim: bool,
}

impl<E> Required<E> {
    /// Fails empty input with `error`.
    pub fn new(error: E) -> Self {
        Self { error, trim: false }
    }

    /// Treats whitespace-only input as empty.
    #[must_use]
    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<T, E> ValidationRule<T> for Required<E>
where
    T: AsRef<str> + ?Sized,
    E: ValidationError + Clone,
{
    type Error = E;

    fn error(&self) -> &E {
        &self.error
    }

    fn validate(&self, input: &T) -> ValidationResult<E> {
        let text = input.as_ref();
        let present = if self.trim { !text.trim().is_empty() } else { !text.is_empty() };
        outcome(present, &self.error)
    }
}
