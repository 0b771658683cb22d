use crate::types::alloc_type::{Arc, Box, Cow, String};

/// Describes why a rule failed.
///
/// The only requirement is a human-readable message. Any type implementing
/// this trait can serve as a rule's failure descriptor; descriptors are
/// treated as immutable once built.
///
/// # Examples
///
/// ```
/// use rule_rail::traits::ValidationError;
///
/// #[derive(Debug, Clone)]
/// enum SignupError {
///     UsernameTaken,
///     PasswordTooWeak,
/// }
///
/// impl ValidationError for SignupError {
///     fn message(&self) -> std::borrow::Cow<'_, str> {
///         match self {
///             SignupError::UsernameTaken => "username is taken".into(),
///             SignupError::PasswordTooWeak => "password is too weak".into(),
///         }
///     }
/// }
///
/// assert_eq!(SignupError::UsernameTaken.message(), "username is taken");
/// ```
pub trait ValidationError {
    /// Human-readable reason for the failure.
    fn message(&self) -> Cow<'_, str>;

    /// Optional short identifier for programmatic matching.
    fn code(&self) -> Option<&str> {
        None
    }
}

impl ValidationError for &str {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

impl ValidationError for String {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl ValidationError for Cow<'_, str> {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&**self)
    }
}

impl<E: ValidationError + ?Sized> ValidationError for Box<E> {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    #[inline]
    fn code(&self) -> Option<&str> {
        (**self).code()
    }
}

impl<E: ValidationError + ?Sized> ValidationError for Arc<E> {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    #[inline]
    fn code(&self) -> Option<&str> {
        (**self).code()
    }
}
