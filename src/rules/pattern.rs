use regex::Regex;

use crate::rules::outcome;
use crate::traits::{ValidationError, ValidationRule};
use crate::types::RuleError;
use crate::validation::ValidationResult;

/// Text input must match a regular expression.
///
/// [`Pattern::new`] requires the whole input to match; [`Pattern::partial`]
/// accepts a match anywhere. A prebuilt [`Regex`] passed to
/// [`Pattern::from_regex`] is used as given, so anchoring is up to the caller.
///
/// Requires the `pattern` feature.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::Pattern;
/// use rule_rail::traits::ValidationRule;
///
/// let digits = Pattern::new(r"[0-9]+", "digits only").unwrap();
/// assert!(digits.validate("2024").is_valid());
/// assert!(digits.validate("20x24").is_invalid());
///
/// let has_digit = Pattern::partial(r"[0-9]", "needs a digit").unwrap();
/// assert!(has_digit.validate("pa55word").is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern<E = RuleError> {
    regex: Regex,
    error: E,
}

impl<E> Pattern<E> {
    /// Compiles `pattern` so that it must match the entire input.
    ///
    /// Any expression [`Regex::new`] accepts is accepted here, including
    /// verbose-mode (`(?x)`) expressions that end in a `#` comment.
    ///
    /// # Errors
    ///
    /// Returns the compile error when `pattern` is not a valid expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::Pattern;
    /// use rule_rail::traits::ValidationRule;
    ///
    /// let year = Pattern::new("(?x) [0-9]{4}  # four digits", "not a year").unwrap();
    /// assert!(year.validate("2024").is_valid());
    /// assert!(year.validate("20245").is_invalid());
    /// ```
    pub fn new(pattern: &str, error: E) -> Result<Self, regex::Error> {
        // Checked on its own first so that the wrapper below can never turn an
        // unbalanced expression such as `a)|(b` into a valid one.
        Regex::new(pattern)?;
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            // A trailing `#` comment swallows the closing anchor. The newline
            // ends the comment and is ignored as verbose-mode whitespace.
            .or_else(|_| Regex::new(&format!("^(?:{pattern}\n)$")))?;
        Ok(Self { regex, error })
    }

    /// Compiles `pattern` so that a match anywhere in the input passes.
    ///
    /// # Errors
    ///
    /// Returns the compile error when `pattern` is not a valid expression.
    pub fn partial(pattern: &str, error: E) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex, error })
    }

    /// Wraps a compiled [`Regex`] as is.
    ///
    /// No anchors are added, so `Regex::new("[0-9]")` accepts any input that
    /// contains a digit.
    pub fn from_regex(regex: Regex, error: E) -> Self {
        Self { regex, error }
    }

    /// The compiled expression, including any anchoring added by
    /// [`new`](Self::new).
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<T, E> ValidationRule<T> for Pattern<E>
where
    T: AsRef<str> + ?Sized,
    E: ValidationError + Clone,
{
    type Error = E;

    fn error(&self) -> &E {
        &self.error
    }

    fn validate(&self, input: &T) -> ValidationResult<E> {
        outcome(self.regex.is_match(input.as_ref()), &self.error)
    }
}
