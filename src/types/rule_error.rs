use core::fmt;

use crate::traits::ValidationError;
use crate::types::alloc_type::{Cow, String};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The stock failure descriptor: a message plus an optional machine code.
///
/// Messages and codes are `Cow<'static, str>`, so static literals cost no
/// allocation.
///
/// # Examples
///
/// ```
/// use rule_rail::types::RuleError;
///
/// let err = RuleError::new("must not be empty").with_code("required");
/// assert_eq!(err.to_string(), "must not be empty (required)");
/// assert_eq!(err.code(), Some("required"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleError {
    message: Cow<'static, str>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    code: Option<Cow<'static, str>>,
}

impl RuleError {
    /// Creates an error with a message and no code.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into(), code: None }
    }

    /// Attaches a short identifier for programmatic matching.
    #[inline]
    #[must_use]
    pub fn with_code<C>(mut self, code: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.code = Some(code.into());
        self
    }

    /// The human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl ValidationError for RuleError {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&*self.message)
    }

    #[inline]
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuleError {}

impl From<&'static str> for RuleError {
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for RuleError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
