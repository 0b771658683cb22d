//! Errors signalling misuse of the construction API.
//!
//! Rule and absence failures are ordinary data carried by
//! [`ValidationResult`](crate::validation::ValidationResult). The types here
//! cover the two programmer errors the library rejects instead:
//!
//! - building an `Invalid` result from zero errors ([`EmptyFailures`])
//! - asking a subject to validate itself with no rules attached ([`MissingRules`])

use core::fmt;

/// Attempted to build an invalid result without any errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyFailures;

impl fmt::Display for EmptyFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an invalid result must carry at least one error")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyFailures {}

/// Attempted to validate a subject that has no rule set attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MissingRules;

impl fmt::Display for MissingRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attempted to validate without attaching rules")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MissingRules {}

/// Either kind of construction misuse, for callers that want a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MisuseError {
    EmptyFailures(EmptyFailures),
    MissingRules(MissingRules),
}

impl fmt::Display for MisuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MisuseError::EmptyFailures(inner) => write!(f, "validator misuse: {inner}"),
            MisuseError::MissingRules(inner) => write!(f, "validator misuse: {inner}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MisuseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MisuseError::EmptyFailures(inner) => Some(inner),
            MisuseError::MissingRules(inner) => Some(inner),
        }
    }
}

impl From<EmptyFailures> for MisuseError {
    fn from(value: EmptyFailures) -> Self {
        MisuseError::EmptyFailures(value)
    }
}

impl From<MissingRules> for MisuseError {
    fn from(value: MissingRules) -> Self {
        MisuseError::MissingRules(value)
    }
}
