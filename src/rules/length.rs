use crate::rules::outcome;
use crate::traits::{ValidationError, ValidationRule};
use crate::types::RuleError;
use crate::validation::ValidationResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the length of text input is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthUnit {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// UTF-8 bytes.
    Bytes,
    /// UTF-16 code units.
    Utf16,
}

impl LengthUnit {
    /// Length of `text` in this unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::LengthUnit;
    ///
    /// assert_eq!(LengthUnit::Chars.measure("né"), 2);
    /// assert_eq!(LengthUnit::Bytes.measure("né"), 3);
    /// assert_eq!(LengthUnit::Utf16.measure("😀"), 2);
    /// ```
    pub fn measure(self, text: &str) -> usize {
        match self {
            LengthUnit::Chars => text.chars().count(),
            LengthUnit::Bytes => text.len(),
            LengthUnit::Utf16 => text.encode_utf16().count(),
        }
    }
}

/// Text length must fall within inclusive bounds.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{Length, LengthUnit};
/// use rule_rail::traits::ValidationRule;
///
/// let short = Length::max(5, "at most 5 characters");
/// assert!(short.validate("hello").is_valid());
/// assert!(short.validate("hello world").is_invalid());
/// assert!(short.validate("").is_valid());
///
/// // "héllo" is five characters but six UTF-8 bytes.
/// assert!(short.validate("héllo").is_valid());
/// assert!(short.measured_in(LengthUnit::Bytes).validate("héllo").is_invalid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length<E = RuleError> {
    min: Option<usize>,
    max: Option<usize>,
    unit: LengthUnit,
    error: E,
}

impl<E> Length<E> {
    /// At least `min` long.
    pub fn min(min: usize, error: E) -> Self {
        Self { min: Some(min), max: None, unit: LengthUnit::Chars, error }
    }

    /// At most `max` long.
    pub fn max(max: usize, error: E) -> Self {
        Self { min: None, max: Some(max), unit: LengthUnit::Chars, error }
    }

    /// Between `min` and `max`, both inclusive.
    pub fn range(min: usize, max: usize, error: E) -> Self {
        Self { min: Some(min), max: Some(max), unit: LengthUnit::Chars, error }
    }

    /// Exactly `len` long.
    pub fn exact(len: usize, error: E) -> Self {
        Self::range(len, len, error)
    }

    /// Measures input in `unit` instead of the default
    /// [`LengthUnit::Chars`].
    #[must_use]
    pub fn measured_in(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// The `(min, max)` bounds; `None` means unbounded on that side.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::Length;
    ///
    /// assert_eq!(Length::min(3, "short").bounds(), (Some(3), None));
    /// assert_eq!(Length::exact(4, "pin").bounds(), (Some(4), Some(4)));
    /// ```
    pub fn bounds(&self) -> (Option<usize>, Option<usize>) {
        (self.min, self.max)
    }

    /// The unit input is measured in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    fn accepts(&self, len: usize) -> bool {
        self.min.map_or(true, |min| len >= min) && self.max.map_or(true, |max| len <= max)
    }
}

impl<T, E> ValidationRule<T> for Length<E>
where
    T: AsRef<str> + ?Sized,
    E: ValidationError + Clone,
{
    type Error = E;

    fn error(&self) -> &E {
        &self.error
    }

    fn validate(&self, input: &T) -> ValidationResult<E> {
        let len = self.unit.measure(input.as_ref());
        outcome(self.accepts(len), &self.error)
    }
}
