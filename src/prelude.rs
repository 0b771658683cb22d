//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use rule_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`rule_set!`]
//! - **Types**: [`ValidationResult`], [`ValidationRuleSet`], [`Validator`], [`RuleError`], [`Field`]
//! - **Traits**: [`ValidationRule`], [`ValidationError`], [`ValidatableSubject`]
//! - **Rules**: everything in [`crate::rules`]
//!
//! # Examples
//!
//! ```
//! use rule_rail::prelude::*;
//!
//! let rules: ValidationRuleSet<str> = rule_set![
//!     Required::new(RuleError::new("must not be empty")),
//!     Length::max(5, RuleError::new("at most 5 characters")),
//! ];
//!
//! let result = Validator::validate_all(Some(""), &rules);
//! assert_eq!(result.to_string(), "invalid: must not be empty");
//! ```

// Macros
pub use crate::rule_set;

// Core types
pub use crate::field::Field;
pub use crate::types::{Failures, RuleError};
pub use crate::validation::{ValidationResult, ValidationRuleSet, Validator};

// Traits
pub use crate::traits::{ValidatableSubject, ValidationError, ValidationRule};

// Rules
pub use crate::rules::*;
