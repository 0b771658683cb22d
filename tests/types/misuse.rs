use rule_rail::types::{EmptyFailures, MisuseError, MissingRules};

#[test]
fn messages_describe_the_misuse() {
    assert_eq!(EmptyFailures.to_string(), "an invalid result must carry at least one error");
    assert_eq!(MissingRules.to_string(), "attempted to validate without attaching rules");
}

#[test]
fn misuse_error_wraps_both_kinds() {
    let empty: MisuseError = EmptyFailures.into();
    let missing: MisuseError = MissingRules.into();

    assert_eq!(empty, MisuseError::EmptyFailures(EmptyFailures));
    assert_eq!(missing.to_string(), "validator misuse: attempted to validate without attaching rules");
}

#[test]
#[cfg(feature = "std")]
fn misuse_error_exposes_source() {
    use std::error::Error;

    let err = MisuseError::from(EmptyFailures);
    let source = err.source().expect("source");

    assert_eq!(source.to_string(), EmptyFailures.to_string());
}

#[test]
fn question_mark_converts_into_misuse_error() {
    fn build() -> Result<(), MisuseError> {
        Err(MissingRules)?;
        Ok(())
    }

    assert_eq!(build(), Err(MisuseError::MissingRules(MissingRules)));
}
