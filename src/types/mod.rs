//! Supporting types: failure lists, the stock error descriptor, misuse errors
//! and result formatting.
//!
//! # Examples
//!
//! ```
//! use rule_rail::types::{Failures, RuleError};
//!
//! let failures = Failures::new(RuleError::new("must not be empty"));
//! assert_eq!(failures.first().message(), "must not be empty");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod failures;
pub mod misuse;
pub mod result_formatter;
pub mod rule_error;

pub use failures::Failures;
pub use misuse::{EmptyFailures, MisuseError, MissingRules};
pub use result_formatter::{ResultFormatConfig, ResultFormatter};
pub use rule_error::RuleError;

/// SmallVec-backed collection used for accumulating rule errors.
///
/// Uses inline storage for one element, the common case of a single failing
/// rule, to avoid heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
