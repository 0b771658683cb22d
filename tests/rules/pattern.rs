use regex::Regex;
use rule_rail::rules::Pattern;
use rule_rail::traits::ValidationRule;
use rule_rail::types::RuleError;

#[test]
fn new_requires_a_full_match() {
    let rule = Pattern::new(r"[a-z]+", "lowercase only").unwrap();

    assert!(rule.validate("abc").is_valid());
    assert!(rule.validate("abc1").is_invalid());
    assert!(rule.validate("").is_invalid());
}

#[test]
fn alternation_is_anchored_as_a_whole() {
    let rule = Pattern::new("cat|dog", "pet").unwrap();

    assert!(rule.validate("dog").is_valid());
    assert!(rule.validate("cats").is_invalid());
    assert!(rule.validate("hotdog").is_invalid());
}

#[test]
fn partial_matches_anywhere() {
    let rule = Pattern::partial(r"\d", "needs a digit").unwrap();

    assert!(rule.validate("abc1def").is_valid());
    assert!(rule.validate("abcdef").is_invalid());
}

#[test]
fn invalid_expression_is_reported() {
    assert!(Pattern::new("(unclosed", "never").is_err());
    assert!(Pattern::partial("[z-a]", "never").is_err());
}

#[test]
fn from_regex_uses_expression_as_given() {
    let regex = Regex::new("^[A-Z]{3}$").unwrap();
    let rule = Pattern::from_regex(regex, RuleError::new("currency code").with_code("iso4217"));

    assert!(rule.validate("EUR").is_valid());
    assert!(rule.validate("eur").is_invalid());
    assert_eq!(rule.as_regex().as_str(), "^[A-Z]{3}$");
    assert_eq!(rule.validate("X").errors()[0].code(), Some("iso4217"));
}

#[test]
fn verbose_expression_with_trailing_comment() {
    let expr = "(?x)[0-9]+ # digits";
    assert!(Regex::new(expr).is_ok());

    let rule = Pattern::new(expr, "digits only").unwrap();
    assert!(rule.validate("123").is_valid());
    assert!(rule.validate("12a").is_invalid());
    assert!(rule.validate("a123").is_invalid());
}

#[test]
fn verbose_flag_does_not_leak_past_the_expression() {
    let rule = Pattern::new("(?x) a b c  # spaced out", "abc").unwrap();

    assert!(rule.validate("abc").is_valid());
    assert!(rule.validate("a b c").is_invalid());
}

#[test]
fn unbalanced_expression_is_rejected_even_if_wrapping_would_balance_it() {
    assert!(Regex::new("a)|(b").is_err());
    assert!(Pattern::new("a)|(b", "never").is_err());
}
