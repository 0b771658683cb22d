//! Rule composition and evaluation for arbitrary values.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `rule_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Evaluating a Rule Set
//!
//! ```
//! use rule_rail::rules::{Length, Required};
//! use rule_rail::{rule_set, RuleError, ValidationRuleSet, Validator};
//!
//! let rules: ValidationRuleSet<str> = rule_set![
//!     Required::new(RuleError::new("must not be empty")),
//!     Length::max(5, RuleError::new("at most 5 characters")),
//! ];
//!
//! // Every rule runs; errors come back in rule order.
//! assert!(Validator::validate_all(Some("hi"), &rules).is_valid());
//! assert_eq!(
//!     Validator::validate_all(Some("hello world"), &rules).errors(),
//!     &[RuleError::new("at most 5 characters")]
//! );
//!
//! // An absent value fails every rule with that rule's own error.
//! assert_eq!(Validator::validate_all(None, &rules).errors().len(), 2);
//! ```
//!
//! ## Combining Rule Sets
//!
//! ```
//! use rule_rail::rules::{Condition, Length};
//! use rule_rail::{ValidationRuleSet, Validator};
//!
//! let base = ValidationRuleSet::<str, &str>::new().with_rule(Length::min(8, "too short"));
//! let extra = ValidationRuleSet::new()
//!     .with_rule(Condition::new(|s: &str| s.chars().any(|c| c.is_ascii_digit()), "needs a digit"));
//!
//! let password = base.combine(&extra);
//! assert_eq!(
//!     Validator::validate_all(Some("abc"), &password).errors(),
//!     &["too short", "needs a digit"]
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod trace;

/// Explicit-composition validated values
pub mod field;
/// Rule-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Ready-made rule implementations
pub mod rules;
/// Core traits for rules, errors and subjects
pub mod traits;
/// Failure lists, error descriptors and formatting
pub mod types;
/// Validation results, rule sets and the evaluation engine
pub mod validation;

pub use field::Field;
pub use traits::*;
pub use types::{EmptyFailures, Failures, MisuseError, MissingRules, RuleError};
pub use validation::{ValidationResult, ValidationRuleSet, Validator};
