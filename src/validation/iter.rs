use crate::types::{ErrorVec, Failures};
use crate::validation::core::ValidationResult;

/// Borrowing iterator over the errors of a [`ValidationResult`].
#[derive(Debug, Clone)]
pub struct ErrorsIter<'a, E> {
    inner: core::slice::Iter<'a, E>,
}

impl<'a, E> Iterator for ErrorsIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> DoubleEndedIterator for ErrorsIter<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<E> ExactSizeIterator for ErrorsIter<'_, E> {}

/// Owning iterator over the errors of a [`ValidationResult`].
pub struct IntoErrors<E> {
    inner: Option<smallvec::IntoIter<[E; 1]>>,
}

impl<E> Iterator for IntoErrors<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(it) => it.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<E> ExactSizeIterator for IntoErrors<E> {}

impl<E> ValidationResult<E> {
    /// Iterates the errors in evaluation order; yields nothing when valid.
    pub fn iter_errors(&self) -> ErrorsIter<'_, E> {
        ErrorsIter { inner: self.errors().iter() }
    }
}

impl<E> IntoIterator for ValidationResult<E> {
    type Item = E;
    type IntoIter = IntoErrors<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoErrors { inner: self.into_failures().map(IntoIterator::into_iter) }
    }
}

impl<'a, E> IntoIterator for &'a ValidationResult<E> {
    type Item = &'a E;
    type IntoIter = ErrorsIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_errors()
    }
}

/// Reduces many outcomes into one, concatenating errors in iteration order.
///
/// Every item is consumed; an empty iterator yields `Valid`.
///
/// # Examples
///
/// ```
/// use rule_rail::validation::ValidationResult;
///
/// let all: ValidationResult<&str> = vec![
///     ValidationResult::valid(),
///     ValidationResult::failure("first"),
///     ValidationResult::failure("second"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(all.errors(), &["first", "second"]);
/// ```
impl<E> FromIterator<ValidationResult<E>> for ValidationResult<E> {
    fn from_iter<I: IntoIterator<Item = ValidationResult<E>>>(iter: I) -> Self {
        let mut errors = ErrorVec::new();
        for result in iter {
            if let Some(failures) = result.into_failures() {
                errors.extend(failures);
            }
        }

        match Failures::try_from(errors) {
            Ok(failures) => ValidationResult::Invalid(failures),
            Err(_) => ValidationResult::Valid,
        }
    }
}
