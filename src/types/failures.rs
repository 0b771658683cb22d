use crate::types::misuse::EmptyFailures;
use crate::types::ErrorVec;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-empty, ordered list of rule errors.
///
/// This wraps the underlying storage (`ErrorVec`) and guarantees at least one
/// element, which is what lets [`ValidationResult::Invalid`] promise it always
/// carries a reason.
///
/// Construction from a possibly-empty source goes through
/// [`Failures::try_from_iter`], which rejects empty input with
/// [`EmptyFailures`].
///
/// [`ValidationResult::Invalid`]: crate::validation::ValidationResult::Invalid
///
/// # Examples
///
/// ```
/// use rule_rail::types::Failures;
///
/// let mut failures = Failures::new("too short");
/// failures.push("missing digit");
/// assert_eq!(failures.len(), 2);
/// assert_eq!(failures.first(), &"too short");
///
/// assert!(Failures::<&str>::try_from_iter([]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "ErrorVec<E>",
        into = "ErrorVec<E>",
        bound(serialize = "E: Clone + Serialize", deserialize = "E: Deserialize<'de>")
    )
)]
pub struct Failures<E> {
    items: ErrorVec<E>,
}

impl<E> Failures<E> {
    /// Creates a list holding a single error.
    #[inline]
    pub fn new(first: E) -> Self {
        let mut items = ErrorVec::new();
        items.push(first);
        Self { items }
    }

    /// Collects errors into a list, failing when the iterator yields nothing.
    #[inline]
    pub fn try_from_iter<I>(errors: I) -> Result<Self, EmptyFailures>
    where
        I: IntoIterator<Item = E>,
    {
        let items: ErrorVec<E> = errors.into_iter().collect();
        Self::try_from(items)
    }

    /// Appends an error at the end.
    #[inline]
    pub fn push(&mut self, error: E) {
        self.items.push(error);
    }

    /// Appends every error from `iter`, keeping their order.
    #[inline]
    pub fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }

    /// Appends another list. The result is still non-empty.
    #[inline]
    pub fn append(&mut self, other: Failures<E>) {
        self.items.extend(other.items);
    }

    /// Number of errors, always at least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The first recorded error.
    #[inline]
    pub fn first(&self) -> &E {
        // Non-empty by construction.
        &self.items[0]
    }

    /// The errors in recorded order.
    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Transforms every error, preserving order and length.
    #[inline]
    pub fn map<G, F>(self, f: F) -> Failures<G>
    where
        F: FnMut(E) -> G,
    {
        Failures { items: self.items.into_iter().map(f).collect() }
    }

    /// Consumes the list and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<E> {
        self.items
    }
}

impl<E> Deref for Failures<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.items
    }
}

impl<E> AsRef<[E]> for Failures<E> {
    fn as_ref(&self) -> &[E] {
        &self.items
    }
}

impl<E: Hash> Hash for Failures<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<E> TryFrom<ErrorVec<E>> for Failures<E> {
    type Error = EmptyFailures;

    fn try_from(items: ErrorVec<E>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            Err(EmptyFailures)
        } else {
            Ok(Self { items })
        }
    }
}

impl<E> From<Failures<E>> for ErrorVec<E> {
    fn from(failures: Failures<E>) -> Self {
        failures.items
    }
}

impl<E> IntoIterator for Failures<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Failures<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
