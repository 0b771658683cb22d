use core::fmt;

use crate::traits::{ValidationError, ValidationRule};
use crate::types::alloc_type::{Arc, Vec};
use crate::types::RuleError;

/// Shared handle to a rule inside a [`ValidationRuleSet`].
pub type SharedRule<T, E> = Arc<dyn ValidationRule<T, Error = E> + Send + Sync>;

/// An ordered, composable collection of rules over one input type.
///
/// Order is significant: it is both the evaluation order and the order of
/// errors in the aggregate result. Duplicate rules are allowed and are
/// evaluated independently.
///
/// Rules are held behind shared, immutable handles, so cloning a set is
/// cheap and behaves copy-on-write: adding to a clone never changes the set it
/// was cloned from, and a set can be evaluated from several threads while
/// another clone is being extended.
///
/// # Examples
///
/// ```
/// use rule_rail::rules::{Length, Required};
/// use rule_rail::types::RuleError;
/// use rule_rail::validation::ValidationRuleSet;
///
/// let mut username = ValidationRuleSet::<str>::new();
/// username.add(Required::new(RuleError::new("required")));
/// username.add(Length::max(16, RuleError::new("too long")));
///
/// let strict = username.combine(
///     &ValidationRuleSet::new().with_rule(Length::min(3, RuleError::new("too short"))),
/// );
/// assert_eq!(username.len(), 2);
/// assert_eq!(strict.len(), 3);
/// ```
pub struct ValidationRuleSet<T: ?Sized, E = RuleError> {
    rules: Vec<SharedRule<T, E>>,
}

impl<T: ?Sized, E> ValidationRuleSet<T, E> {
    /// Creates a set with no rules. Evaluating it always yields `Valid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::validation::{ValidationRuleSet, Validator};
    ///
    /// let rules = ValidationRuleSet::<str>::new();
    /// assert!(rules.is_empty());
    /// assert!(Validator::validate_all(None, &rules).is_valid());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates an empty set with room for `capacity` rules.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { rules: Vec::with_capacity(capacity) }
    }

    /// Appends a rule at the end of the set.
    ///
    /// The rule is moved behind a shared handle. Adding the same rule twice
    /// keeps both copies, and both are evaluated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::{Length, Required};
    /// use rule_rail::validation::ValidationRuleSet;
    ///
    /// let mut rules = ValidationRuleSet::<str, &str>::new();
    /// rules.add(Required::new("required"));
    /// rules.add(Length::max(5, "too long"));
    ///
    /// assert_eq!(rules.errors().copied().collect::<Vec<_>>(), ["required", "too long"]);
    /// ```
    pub fn add<R>(&mut self, rule: R)
    where
        R: ValidationRule<T, Error = E> + Send + Sync + 'static,
    {
        self.rules.push(Arc::new(rule));
    }

    /// Builder form of [`add`](Self::add).
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::Comparison;
    /// use rule_rail::validation::ValidationRuleSet;
    ///
    /// let port = ValidationRuleSet::<u16, &str>::new()
    ///     .with_rule(Comparison::at_least(1024, "privileged port"));
    /// assert_eq!(port.len(), 1);
    /// ```
    #[must_use]
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<T, Error = E> + Send + Sync + 'static,
    {
        self.add(rule);
        self
    }

    /// Appends an already shared rule handle.
    ///
    /// Useful when one rule instance should appear in several sets without
    /// being rebuilt.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use rule_rail::rules::Required;
    /// use rule_rail::validation::{SharedRule, ValidationRuleSet};
    ///
    /// let required: SharedRule<str, &str> = Arc::new(Required::new("required"));
    ///
    /// let mut login = ValidationRuleSet::new();
    /// login.add_shared(Arc::clone(&required));
    /// let mut signup = ValidationRuleSet::new();
    /// signup.add_shared(required);
    ///
    /// assert_eq!(login.len() + signup.len(), 2);
    /// ```
    pub fn add_shared(&mut self, rule: SharedRule<T, E>) {
        self.rules.push(rule);
    }

    /// Inserts a rule at `index`, shifting later rules back.
    ///
    /// An index past the end appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::{Length, Required};
    /// use rule_rail::validation::ValidationRuleSet;
    ///
    /// let mut rules = ValidationRuleSet::<str, &str>::new().with_rule(Length::max(5, "too long"));
    /// rules.insert(0, Required::new("required"));
    /// rules.insert(99, Length::min(2, "too short"));
    ///
    /// assert_eq!(
    ///     rules.errors().copied().collect::<Vec<_>>(),
    ///     ["required", "too long", "too short"]
    /// );
    /// ```
    pub fn insert<R>(&mut self, index: usize, rule: R)
    where
        R: ValidationRule<T, Error = E> + Send + Sync + 'static,
    {
        let index = index.min(self.rules.len());
        self.rules.insert(index, Arc::new(rule));
    }

    /// Returns a new set holding `self`'s rules followed by `other`'s.
    ///
    /// Neither operand changes. Combination is associative:
    /// `a.combine(&b).combine(&c)` and `a.combine(&b.combine(&c))` hold the
    /// same rules in the same order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::{Length, Required};
    /// use rule_rail::validation::{ValidationRuleSet, Validator};
    ///
    /// let base = ValidationRuleSet::<str, &str>::new().with_rule(Required::new("required"));
    /// let short = ValidationRuleSet::<str, &str>::new().with_rule(Length::max(3, "too long"));
    ///
    /// let both = base.combine(&short);
    /// assert_eq!(both.len(), 2);
    /// assert_eq!(base.len(), 1);
    /// assert_eq!(Validator::validate_all(None, &both).errors(), &["required", "too long"]);
    /// ```
    #[must_use]
    pub fn combine(&self, other: &ValidationRuleSet<T, E>) -> ValidationRuleSet<T, E> {
        let mut rules = Vec::with_capacity(self.rules.len() + other.rules.len());
        rules.extend(self.rules.iter().cloned());
        rules.extend(other.rules.iter().cloned());
        Self { rules }
    }

    /// Number of rules, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set holds no rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rules::{Length, Required};
    /// use rule_rail::traits::ValidationRule;
    /// use rule_rail::validation::ValidationRuleSet;
    ///
    /// let rules = ValidationRuleSet::<str, &str>::new()
    ///     .with_rule(Required::new("required"))
    ///     .with_rule(Length::max(2, "too long"));
    ///
    /// let passed: Vec<bool> = rules.iter().map(|rule| rule.validate("abc").is_valid()).collect();
    /// assert_eq!(passed, [true, false]);
    /// ```
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SharedRule<T, E>> {
        self.rules.iter()
    }

    /// The failure descriptors of every rule, in set order.
    ///
    /// This is what an absent input reports when the set is evaluated.
    pub fn errors(&self) -> impl Iterator<Item = &E> + '_
    where
        E: ValidationError + Clone,
    {
        self.rules.iter().map(|rule| rule.error())
    }
}

impl<T: ?Sized, E> Default for ValidationRuleSet<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, E> Clone for ValidationRuleSet<T, E> {
    fn clone(&self) -> Self {
        Self { rules: self.rules.clone() }
    }
}

impl<T: ?Sized, E> fmt::Debug for ValidationRuleSet<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRuleSet").field("rules", &self.rules.len()).finish()
    }
}

impl<T: ?Sized, E> Extend<SharedRule<T, E>> for ValidationRuleSet<T, E> {
    fn extend<I: IntoIterator<Item = SharedRule<T, E>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<T: ?Sized, E> FromIterator<SharedRule<T, E>> for ValidationRuleSet<T, E> {
    fn from_iter<I: IntoIterator<Item = SharedRule<T, E>>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}

impl<'a, T: ?Sized, E> IntoIterator for &'a ValidationRuleSet<T, E> {
    type Item = &'a SharedRule<T, E>;
    type IntoIter = core::slice::Iter<'a, SharedRule<T, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
