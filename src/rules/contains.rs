use core::borrow::Borrow;

use crate::rules::outcome;
use crate::traits::{ValidationError, ValidationRule};
use crate::types::alloc_type::Vec;
use crate::types::RuleError;
use crate::validation::ValidationResult;

/// Input must be one of a fixed list of values.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::Contains;
/// use rule_rail::traits::ValidationRule;
///
/// let currency = Contains::new(
///     ["EUR", "GBP", "USD"].map(String::from),
///     "unsupported currency",
/// );
/// assert!(currency.validate("GBP").is_valid());
/// assert!(currency.validate("JPY").is_invalid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains<T, E = RuleError> {
    values: Vec<T>,
    error: E,
}

impl<T, E> Contains<T, E> {
    /// Collects the accepted values. An empty list rejects everything.
    pub fn new<I>(values: I, error: E) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self { values: values.into_iter().collect(), error }
    }

    /// The accepted values, in construction order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<T, U, E> ValidationRule<U> for Contains<T, E>
where
    T: Borrow<U>,
    U: PartialEq + ?Sized,
    E: ValidationError + Clone,
{
    type Error = E;

    fn error(&self) -> &E {
        &self.error
    }

    fn validate(&self, input: &U) -> ValidationResult<E> {
        let found = self.values.iter().any(|value| <T as Borrow<U>>::borrow(value) == input);
        outcome(found, &self.error)
    }
}
