//! Core traits for rule composition.
//!
//! - [`ValidationError`]: the failure descriptor capability
//! - [`ValidationRule`]: a typed predicate paired with its failure descriptor
//! - [`Validatable`]: marker for rule input
//! - [`ValidatableSubject`]: something that carries an optional input value
//!   and, optionally, its own rule set
//!
//! # Examples
//!
//! ```
//! use rule_rail::traits::{ValidationError, ValidationRule};
//! use rule_rail::rules::Required;
//!
//! let rule = Required::new("required");
//! assert!(rule.validate("value").is_valid());
//! assert_eq!(rule.error().message(), "required");
//! ```

pub mod subject;
pub mod validation_error;
pub mod validation_rule;

pub use subject::ValidatableSubject;
pub use validation_error::ValidationError;
pub use validation_rule::{Validatable, ValidationRule};
