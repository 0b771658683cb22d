use crate::rules::outcome;
use crate::traits::{ValidationError, ValidationRule};
use crate::types::RuleError;
use crate::validation::ValidationResult;

/// Input must lie within an inclusive range.
///
/// Works for any `PartialOrd` type. Values that compare as unordered against
/// a bound (such as `f64::NAN`) fail.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::Comparison;
/// use rule_rail::traits::ValidationRule;
///
/// let percent = Comparison::range(0.0, 100.0, "not a percentage");
/// assert!(percent.validate(&42.5).is_valid());
/// assert!(percent.validate(&100.5).is_invalid());
/// assert!(percent.validate(&f64::NAN).is_invalid());
///
/// let adult = Comparison::at_least(18, "must be an adult");
/// assert!(adult.validate(&18).is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<T, E = RuleError> {
    min: Option<T>,
    max: Option<T>,
    error: E,
}

impl<T, E> Comparison<T, E> {
    /// Between `min` and `max`, both inclusive.
    ///
    /// A `min` greater than `max` is accepted and makes the rule fail for
    /// every input.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::Comparison;
    /// use rule_rail::traits::ValidationRule;
    ///
    /// let dice = Comparison::range(1, 6, "not a die face");
    /// assert!(dice.validate(&1).is_valid());
    /// assert!(dice.validate(&6).is_valid());
    /// assert!(dice.validate(&0).is_invalid());
    ///
    /// let inverted = Comparison::range(6, 1, "never");
    /// assert!(inverted.validate(&3).is_invalid());
    /// ```
    pub fn range(min: T, max: T, error: E) -> Self {
        Self { min: Some(min), max: Some(max), error }
    }

    /// At least `min`, inclusive.
    pub fn at_least(min: T, error: E) -> Self {
        Self { min: Some(min), max: None, error }
    }

    /// At most `max`, inclusive.
    pub fn at_most(max: T, error: E) -> Self {
        Self { min: None, max: Some(max), error }
    }

    /// The lower bound, if one was set.
    pub fn min(&self) -> Option<&T> {
        self.min.as_ref()
    }

    pub fn max(&self) -> Option<&T> {
        self.max.as_ref()
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<T, E> ValidationRule<T> for Comparison<T, E>
where
    T: PartialOrd,
    E: ValidationError + Clone,
{
    type Error = E;

    fn error(&self) -> &E {
        &self.error
    }

    fn validate(&self, input: &T) -> ValidationResult<E> {
        let above_min = self.min.as_ref().map_or(true, |min| input >= min);
        let below_max = self.max.as_ref().map_or(true, |max| input <= max);
        outcome(above_min && below_max, &self.error)
    }
}
