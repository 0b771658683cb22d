//! Ergonomic macros for building rule sets.
//!
//! - [`macro@crate::rule_set`] - Builds a
//!   [`ValidationRuleSet`](crate::validation::ValidationRuleSet) from a list of
//!   rules, keeping their order.

/// Builds a [`ValidationRuleSet`](crate::validation::ValidationRuleSet) from
/// rules listed in evaluation order.
///
/// The input type is inferred from how the set is used, or can be given with
/// a type annotation on the binding.
///
/// # Syntax
///
/// - `rule_set![]` - an empty set
/// - `rule_set![rule_a, rule_b, ...]` - rules in evaluation order
///
/// # Examples
///
/// ```
/// use rule_rail::rule_set;
/// use rule_rail::rules::{Length, Required};
/// use rule_rail::types::RuleError;
/// use rule_rail::validation::{ValidationRuleSet, Validator};
///
/// let rules: ValidationRuleSet<str> = rule_set![
///     Required::new(RuleError::new("must not be empty")),
///     Length::max(5, RuleError::new("at most 5 characters")),
/// ];
///
/// assert_eq!(rules.len(), 2);
/// assert!(Validator::validate_all(Some("hi"), &rules).is_valid());
/// ```
#[macro_export]
macro_rules! rule_set {
    () => {
        $crate::validation::ValidationRuleSet::new()
    };
    ($($rule:expr),+ $(,)?) => {{
        let mut set = $crate::validation::ValidationRuleSet::new();
        $(set.add($rule);)+
        set
    }};
}
