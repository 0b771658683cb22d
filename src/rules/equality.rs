use core::borrow::Borrow;
use core::fmt;

use crate::rules::outcome;
use crate::traits::{ValidationError, ValidationRule};
use crate::types::alloc_type::Box;
use crate::types::RuleError;
use crate::validation::ValidationResult;

enum Target<T> {
    Fixed(T),
    Dynamic(Box<dyn Fn() -> T + Send + Sync>),
}

/// Input must equal a target value.
///
/// The target is either fixed at construction or produced by a closure each
/// time the rule runs, which suits "confirm password" style checks against a
/// value that changes over time.
///
/// A rule over an owned type also accepts its borrowed form, so an
/// `Equality<String>` can validate a `str`.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use rule_rail::rules::Equality;
/// use rule_rail::traits::ValidationRule;
///
/// let magic = Equality::new(42_u32, "wrong answer");
/// assert!(magic.validate(&42_u32).is_valid());
/// assert!(magic.validate(&7_u32).is_invalid());
///
/// let password = Arc::new(Mutex::new(String::from("hunter2")));
/// let source = Arc::clone(&password);
/// let confirm = Equality::dynamic(
///     move || source.lock().unwrap().clone(),
///     "passwords do not match",
/// );
///
/// assert!(confirm.validate("hunter2").is_valid());
/// *password.lock().unwrap() = String::from("correct horse");
/// assert!(confirm.validate("hunter2").is_invalid());
/// ```
pub struct Equality<T, E = RuleError> {
    target: Target<T>,
    error: E,
}

impl<T, E> Equality<T, E> {
    /// Compares against a fixed `target`.
    pub fn new(target: T, error: E) -> Self {
        Self { target: Target::Fixed(target), error }
    }

    /// Calls `target` on every validation and compares against its result.
    ///
    /// The closure is not called at construction time.
    pub fn dynamic<F>(target: F, error: E) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self { target: Target::Dynamic(Box::new(target)), error }
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }
}

impl<T, U, E> ValidationRule<U> for Equality<T, E>
where
    T: Borrow<U>,
    U: PartialEq + ?Sized,
    E: ValidationError + Clone,
{
    type Error = E;

    fn error(&self) -> &E {
        &self.error
    }

    fn validate(&self, input: &U) -> ValidationResult<E> {
        let equal = match &self.target {
            Target::Fixed(target) => <T as Borrow<U>>::borrow(target) == input,
            Target::Dynamic(produce) => {
                let target = produce();
                <T as Borrow<U>>::borrow(&target) == input
            },
        };
        outcome(equal, &self.error)
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Equality<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Equality");
        match &self.target {
            Target::Fixed(target) => out.field("target", target),
            Target::Dynamic(_) => out.field("target", &"<dynamic>"),
        };
        out.field("error", &self.error).finish()
    }
}
