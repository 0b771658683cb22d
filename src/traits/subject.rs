use crate::traits::{Validatable, ValidationError, ValidationRule};
use crate::types::MissingRules;
use crate::validation::{ValidationResult, ValidationRuleSet, Validator};

/// Anything that offers an optional input value and may carry its own rules.
///
/// This is the contract between the evaluation core and an outer binding
/// layer (a form field, a config entry, a request parameter). The subject
/// supplies its current value; evaluation itself is delegated to
/// [`Validator`].
///
/// Implementors that want to react to results, such as
/// [`Field`](crate::field::Field), override [`validate_rule`] and
/// [`validate_rules`]; [`validate`] routes through `validate_rules`.
///
/// [`validate_rule`]: ValidatableSubject::validate_rule
/// [`validate_rules`]: ValidatableSubject::validate_rules
/// [`validate`]: ValidatableSubject::validate
///
/// # Examples
///
/// ```
/// use rule_rail::rules::Required;
/// use rule_rail::traits::ValidatableSubject;
/// use rule_rail::types::{MissingRules, RuleError};
/// use rule_rail::validation::ValidationRuleSet;
///
/// struct Query {
///     term: Option<String>,
///     rules: Option<ValidationRuleSet<String>>,
/// }
///
/// impl ValidatableSubject for Query {
///     type Input = String;
///     type Error = RuleError;
///
///     fn input_value(&self) -> Option<&String> {
///         self.term.as_ref()
///     }
///
///     fn validation_rules(&self) -> Option<&ValidationRuleSet<String>> {
///         self.rules.as_ref()
///     }
/// }
///
/// let bare = Query { term: None, rules: None };
/// assert_eq!(bare.validate(), Err(MissingRules));
///
/// let query = Query {
///     term: Some(String::new()),
///     rules: Some(ValidationRuleSet::new().with_rule(Required::new(RuleError::new("required")))),
/// };
/// assert!(query.validate().unwrap().is_invalid());
/// ```
pub trait ValidatableSubject {
    type Input: Validatable + ?Sized;
    type Error: ValidationError + Clone;

    /// The current value, or `None` when unset.
    fn input_value(&self) -> Option<&Self::Input>;

    /// Rules attached to this subject, if any.
    fn validation_rules(&self) -> Option<&ValidationRuleSet<Self::Input, Self::Error>> {
        None
    }

    /// Evaluates one rule against the current value.
    fn validate_rule<R>(&self, rule: &R) -> ValidationResult<Self::Error>
    where
        R: ValidationRule<Self::Input, Error = Self::Error> + ?Sized,
    {
        Validator::validate(self.input_value(), rule)
    }

    /// Evaluates a rule set against the current value.
    fn validate_rules(
        &self,
        rules: &ValidationRuleSet<Self::Input, Self::Error>,
    ) -> ValidationResult<Self::Error> {
        Validator::validate_all(self.input_value(), rules)
    }

    /// Evaluates the attached rules.
    ///
    /// # Errors
    ///
    /// Returns [`MissingRules`] when no rule set is attached.
    fn validate(&self) -> Result<ValidationResult<Self::Error>, MissingRules> {
        let rules = self.validation_rules().ok_or(MissingRules)?;
        Ok(self.validate_rules(rules))
    }
}
