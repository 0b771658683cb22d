use core::fmt;

use crate::traits::ValidationError;
use crate::types::{EmptyFailures, Failures, ResultFormatConfig, ResultFormatter, RuleError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of evaluating one rule or a whole rule set.
///
/// `ValidationResult<E>` is either `Valid` or `Invalid` with one or more errors
/// of type `E`, in the order the failing rules were evaluated. The
/// [`Failures`] payload cannot be empty, so an `Invalid` result always
/// explains itself.
///
/// Unlike `Result`, failure here is an ordinary outcome: rules and the
/// [`Validator`](crate::validation::Validator) return it as data and never
/// panic or short-circuit on it.
///
/// # Serde Support
///
/// With the `serde` feature, `ValidationResult` implements `Serialize` and
/// `Deserialize` when `E` does. Deserializing an `Invalid` with an empty
/// error list is rejected.
///
/// # Examples
///
/// ```
/// use rule_rail::validation::ValidationResult;
///
/// let ok = ValidationResult::<&str>::valid();
/// assert!(ok.is_valid());
/// assert!(ok.errors().is_empty());
///
/// let bad = ValidationResult::failure("must not be empty");
/// assert!(bad.is_invalid());
/// assert_eq!(bad.errors(), &["must not be empty"]);
///
/// assert!(ValidationResult::<&str>::invalid([]).is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "E: Clone + Serialize", deserialize = "E: Deserialize<'de>"))
)]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum ValidationResult<E = RuleError> {
    Valid,
    Invalid(Failures<E>),
}

impl<E> ValidationResult<E> {
    /// Creates a passing result.
    #[inline]
    pub fn valid() -> Self {
        Self::Valid
    }

    /// Creates a failing result from an ordered list of errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyFailures`] when `errors` yields nothing: an invalid
    /// result must always carry at least one reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::ValidationResult;
    ///
    /// let v = ValidationResult::invalid(["too short", "no digit"]).unwrap();
    /// assert_eq!(v.errors().len(), 2);
    /// ```
    #[inline]
    pub fn invalid<I>(errors: I) -> Result<Self, EmptyFailures>
    where
        I: IntoIterator<Item = E>,
    {
        Failures::try_from_iter(errors).map(Self::Invalid)
    }

    /// Creates a failing result carrying exactly one error.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Invalid(Failures::new(error))
    }

    /// Returns `true` if no rule failed.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The ordered failure reasons; empty when valid.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Valid => &[],
            Self::Invalid(failures) => failures.as_slice(),
        }
    }

    #[must_use]
    #[inline]
    pub fn first_error(&self) -> Option<&E> {
        match self {
            Self::Valid => None,
            Self::Invalid(failures) => Some(failures.first()),
        }
    }

    /// Extracts the failure list, if any.
    #[must_use]
    #[inline]
    pub fn into_failures(self) -> Option<Failures<E>> {
        match self {
            Self::Valid => None,
            Self::Invalid(failures) => Some(failures),
        }
    }

    /// Combines two outcomes.
    ///
    /// The merged result is valid only when both are; otherwise it carries
    /// `self`'s errors followed by `other`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::ValidationResult;
    ///
    /// let merged = ValidationResult::failure("a")
    ///     .merge(ValidationResult::valid())
    ///     .merge(ValidationResult::failure("b"));
    /// assert_eq!(merged.errors(), &["a", "b"]);
    /// ```
    #[inline]
    pub fn merge(self, other: ValidationResult<E>) -> ValidationResult<E> {
        match (self, other) {
            (Self::Valid, Self::Valid) => Self::Valid,
            (Self::Invalid(e), Self::Valid) | (Self::Valid, Self::Invalid(e)) => Self::Invalid(e),
            (Self::Invalid(mut e1), Self::Invalid(e2)) => {
                e1.append(e2);
                Self::Invalid(e1)
            },
        }
    }

    /// Maps each error while preserving validity and order.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> ValidationResult<G>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid => ValidationResult::Valid,
            Self::Invalid(failures) => ValidationResult::Invalid(failures.map(f)),
        }
    }

    /// Converts into a `Result`, keeping every error on the `Err` side.
    #[inline]
    pub fn to_result(self) -> Result<(), Failures<E>> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(failures) => Err(failures),
        }
    }

    /// Wraps a `Result`, turning the error side into a single failure.
    #[inline]
    pub fn from_result<T>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Valid,
            Err(error) => Self::failure(error),
        }
    }
}

// Not derived: `#[derive(Default)]` would add an `E: Default` bound, which
// `RuleError` and most error enums do not meet.
impl<E> Default for ValidationResult<E> {
    fn default() -> Self {
        Self::Valid
    }
}

impl<E> From<Failures<E>> for ValidationResult<E> {
    fn from(failures: Failures<E>) -> Self {
        Self::Invalid(failures)
    }
}

impl<E: ValidationError> fmt::Display for ValidationResult<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ResultFormatConfig::default().format_result(self))
    }
}
