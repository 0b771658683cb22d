//! An explicit-composition validated value.
//!
//! [`Field`] owns its value, its attached rule set and an optional result
//! handler as plain named fields. Nothing is looked up by identity at
//! evaluation time: the rules and handler live exactly as long as the field.

use core::fmt;

use crate::trace::rail_debug;
use crate::traits::{ValidatableSubject, ValidationError, ValidationRule};
use crate::types::alloc_type::Box;
use crate::types::RuleError;
use crate::validation::{ValidationResult, ValidationRuleSet, Validator};

/// Callback invoked with the result and the field after each evaluation.
pub type ValidationHandler<T, E> = Box<dyn Fn(&ValidationResult<E>, &Field<T, E>) + Send + Sync>;

/// A value with its own rules and an optional result sink.
///
/// Every evaluation call (`validate_rule`, `validate_rules`, `validate`)
/// invokes the handler exactly once, after the core has produced the result.
/// With [`validate_on_change`](Field::validate_on_change) enabled,
/// [`set_value`](Field::set_value) re-validates against the attached rules.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// use rule_rail::field::Field;
/// use rule_rail::rules::{Length, Required};
/// use rule_rail::traits::ValidatableSubject;
/// use rule_rail::types::RuleError;
/// use rule_rail::validation::ValidationRuleSet;
///
/// let failures = Arc::new(AtomicUsize::new(0));
/// let seen = Arc::clone(&failures);
///
/// let mut username = Field::<String>::new()
///     .with_rules(
///         ValidationRuleSet::new()
///             .with_rule(Required::new(RuleError::new("required")))
///             .with_rule(Length::max(5, RuleError::new("too long"))),
///     )
///     .with_handler(move |result, _field| {
///         seen.fetch_add(result.errors().len(), Ordering::SeqCst);
///     })
///     .validate_on_change(true);
///
/// let result = username.set_value(Some("hello world".to_string())).unwrap();
/// assert!(result.is_invalid());
/// assert_eq!(failures.load(Ordering::SeqCst), 1);
/// ```
pub struct Field<T, E = RuleError> {
    value: Option<T>,
    rules: Option<ValidationRuleSet<T, E>>,
    handler: Option<ValidationHandler<T, E>>,
    validate_on_change: bool,
}

impl<T, E> Field<T, E> {
    /// Creates an empty field with no rules and no handler.
    pub fn new() -> Self {
        Self { value: None, rules: None, handler: None, validate_on_change: false }
    }

    /// Sets the initial value without triggering validation.
    #[must_use]
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Attaches the rule set used by [`validate`](ValidatableSubject::validate)
    /// and by validate-on-change.
    #[must_use]
    pub fn with_rules(mut self, rules: ValidationRuleSet<T, E>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Installs the handler called after every evaluation, replacing any
    /// previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    ///
    /// use rule_rail::field::Field;
    /// use rule_rail::rules::Comparison;
    /// use rule_rail::traits::ValidatableSubject;
    ///
    /// let last = Arc::new(Mutex::new(None));
    /// let sink = Arc::clone(&last);
    ///
    /// let age = Field::<u8, &str>::new()
    ///     .with_value(15)
    ///     .with_handler(move |result, field| {
    ///         *sink.lock().unwrap() = Some((result.is_valid(), field.value().copied()));
    ///     });
    ///
    /// let _ = age.validate_rule(&Comparison::at_least(18, "too young"));
    /// assert_eq!(*last.lock().unwrap(), Some((false, Some(15))));
    /// ```
    #[must_use]
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ValidationResult<E>, &Field<T, E>) + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Enables or disables re-validation whenever the value changes.
    #[must_use]
    pub fn validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    /// In-place form of [`validate_on_change`](Self::validate_on_change).
    pub fn set_validate_on_change(&mut self, enabled: bool) {
        self.validate_on_change = enabled;
    }

    /// Whether [`set_value`](Self::set_value) re-validates.
    pub fn is_validating_on_change(&self) -> bool {
        self.validate_on_change
    }

    /// The current value, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Removes and returns the value. Never validates.
    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Replaces the attached rules, returning the previous set.
    pub fn attach_rules(&mut self, rules: ValidationRuleSet<T, E>) -> Option<ValidationRuleSet<T, E>> {
        self.rules.replace(rules)
    }

    /// Removes the attached rules. Later calls to `validate` report
    /// [`MissingRules`](crate::types::MissingRules).
    pub fn detach_rules(&mut self) -> Option<ValidationRuleSet<T, E>> {
        self.rules.take()
    }

    /// In-place form of [`with_handler`](Self::with_handler).
    pub fn set_handler<F>(&mut self, handler: F)
    where
        F: Fn(&ValidationResult<E>, &Field<T, E>) + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// Drops the handler. Evaluation still returns results.
    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    fn notify(&self, result: &ValidationResult<E>) {
        if let Some(handler) = &self.handler {
            rail_debug!(valid = result.is_valid(), "invoking validation handler");
            handler(result, self);
        }
    }
}

impl<T, E: ValidationError + Clone> Field<T, E> {
    /// Stores a new value.
    ///
    /// When validate-on-change is enabled and rules are attached, the new value
    /// is validated (invoking the handler) and the result returned. Otherwise
    /// returns `None`.
    pub fn set_value(&mut self, value: Option<T>) -> Option<ValidationResult<E>> {
        self.value = value;

        if !self.validate_on_change {
            return None;
        }

        match &self.rules {
            Some(rules) => {
                rail_debug!(rules = rules.len(), "value changed, re-validating");
                let result = Validator::validate_all(self.value.as_ref(), rules);
                self.notify(&result);
                Some(result)
            },
            None => {
                rail_debug!("value changed, but no rules attached");
                None
            },
        }
    }
}

impl<T, E> Default for Field<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Field<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("value", &self.value)
            .field("rules", &self.rules)
            .field("has_handler", &self.handler.is_some())
            .field("validate_on_change", &self.validate_on_change)
            .finish()
    }
}

impl<T, E: ValidationError + Clone> ValidatableSubject for Field<T, E> {
    type Input = T;
    type Error = E;

    fn input_value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    fn validation_rules(&self) -> Option<&ValidationRuleSet<T, E>> {
        self.rules.as_ref()
    }

    fn validate_rule<R>(&self, rule: &R) -> ValidationResult<E>
    where
        R: ValidationRule<T, Error = E> + ?Sized,
    {
        let result = Validator::validate(self.value.as_ref(), rule);
        self.notify(&result);
        result
    }

    fn validate_rules(&self, rules: &ValidationRuleSet<T, E>) -> ValidationResult<E> {
        let result = Validator::validate_all(self.value.as_ref(), rules);
        self.notify(&result);
        result
    }
}
