//! Ready-made rules.
//!
//! These are ordinary [`ValidationRule`](crate::traits::ValidationRule)
//! implementations with no special standing in the engine. Each one is
//! generic over its error descriptor, defaulting to
//! [`RuleError`](crate::types::RuleError).
//!
//! | Rule | Input | Passes when |
//! |------|-------|-------------|
//! | [`Condition`] | any | the predicate returns `true` |
//! | [`Required`] | text | the text is not empty |
//! | [`Length`] | text | the measured length is within bounds |
//! | [`Comparison`] | `PartialOrd` | the value is within an inclusive range |
//! | [`Equality`] | `PartialEq` | the value equals a fixed or dynamic target |
//! | [`Contains`] | `PartialEq` | the value is one of a fixed list |
//! | `Pattern` | text | the text matches a regex (`pattern` feature) |

use crate::validation::ValidationResult;

pub mod comparison;
pub mod condition;
pub mod contains;
pub mod equality;
pub mod length;
#[cfg(feature = "pattern")]
pub mod pattern;
pub mod required;

pub use comparison::Comparison;
pub use condition::Condition;
pub use contains::Contains;
pub use equality::Equality;
pub use length::{Length, LengthUnit};
#[cfg(feature = "pattern")]
pub use pattern::Pattern;
pub use required::Required;

#[inline]
pub(crate) fn outcome<E: Clone>(holds: bool, error: &E) -> ValidationResult<E> {
    if holds {
        ValidationResult::Valid
    } else {
        ValidationResult::failure(error.clone())
    }
}
