//! Rule composition and evaluation.
//!
//! This module holds the evaluation core of the crate:
//!
//! - [`ValidationResult`] - the outcome, `Valid` or `Invalid` with ordered errors
//! - [`ValidationRuleSet`] - an ordered, composable collection of rules
//! - [`Validator`] - the stateless engine reducing rule outcomes to one result
//!
//! # Examples
//!
//! ```
//! use rule_rail::rules::Comparison;
//! use rule_rail::types::RuleError;
//! use rule_rail::validation::{ValidationRuleSet, Validator};
//!
//! let age = ValidationRuleSet::<u32>::new()
//!     .with_rule(Comparison::range(18, 130, RuleError::new("age out of range")));
//!
//! assert!(Validator::validate_all(Some(&42), &age).is_valid());
//! assert!(Validator::validate_all(Some(&7), &age).is_invalid());
//! assert!(Validator::validate_all(None, &age).is_invalid());
//! ```
pub mod core;
pub mod iter;
pub mod rule_set;
pub mod validator;

pub use self::core::*;
pub use self::iter::*;
pub use self::rule_set::*;
pub use self::validator::*;
