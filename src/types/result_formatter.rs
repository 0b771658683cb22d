//! Rendering of validation outcomes as text.

use crate::traits::ValidationError;
use crate::types::alloc_type::{String, ToString};
use crate::validation::ValidationResult;

/// Trait for customizing how failure lists are rendered.
pub trait ResultFormatter {
    fn format_error(&self, error: &dyn ValidationError) -> String {
        error.message().into_owned()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_errors<'a, E>(&self, errors: impl Iterator<Item = &'a E>) -> String
    where
        E: ValidationError + 'a,
    {
        let mut out = String::new();
        for (i, error) in errors.enumerate() {
            if i > 0 {
                out.push_str(self.separator());
            }
            out.push_str(&self.format_error(error));
        }
        out
    }

    fn format_result<E: ValidationError>(&self, result: &ValidationResult<E>) -> String {
        self.format_errors(result.iter_errors())
    }
}

/// Configuration-based result formatter.
///
/// The default renders `valid` for a passing result and
/// `invalid: first; second` for a failing one.
///
/// # Examples
///
/// ```
/// use rule_rail::types::{ResultFormatConfig, ResultFormatter, RuleError};
/// use rule_rail::validation::ValidationResult;
///
/// let result = ValidationResult::invalid([
///     RuleError::new("too short").with_code("len"),
///     RuleError::new("needs a digit"),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     ResultFormatConfig::default().format_result(&result),
///     "invalid: too short (len); needs a digit"
/// );
/// assert_eq!(
///     ResultFormatConfig::bulleted().format_result(&result),
///     "invalid:\n- too short (len)\n- needs a digit"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultFormatConfig {
    pub separator: String,
    pub error_prefix: Option<String>,
    pub header: Option<String>,
    pub valid_label: String,
    pub numbered: bool,
    pub show_code: bool,
}

impl Default for ResultFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            error_prefix: None,
            header: Some("invalid: ".into()),
            valid_label: "valid".into(),
            numbered: false,
            show_code: true,
        }
    }
}

impl ResultFormatConfig {
    /// Messages only, joined by `" | "`, without header or codes.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), header: None, show_code: false, ..Default::default() }
    }

    /// One `- message` line per error under an `invalid:` header.
    #[inline]
    pub fn bulleted() -> Self {
        Self {
            separator: "\n".into(),
            error_prefix: Some("- ".into()),
            header: Some("invalid:\n".into()),
            ..Default::default()
        }
    }

    /// One `N. message` line per error, counting from 1.
    #[inline]
    pub fn numbered() -> Self {
        Self {
            separator: "\n".into(),
            header: Some("invalid:\n".into()),
            numbered: true,
            ..Default::default()
        }
    }

    /// The default layout with codes left out.
    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }
}

impl ResultFormatter for ResultFormatConfig {
    fn format_error(&self, error: &dyn ValidationError) -> String {
        let mut out = String::new();
        if let Some(prefix) = &self.error_prefix {
            out.push_str(prefix);
        }
        out.push_str(&error.message());
        if self.show_code {
            if let Some(code) = error.code() {
                out.push_str(" (");
                out.push_str(code);
                out.push(')');
            }
        }
        out
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_errors<'a, E>(&self, errors: impl Iterator<Item = &'a E>) -> String
    where
        E: ValidationError + 'a,
    {
        let mut out = String::new();
        for (i, error) in errors.enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            if self.numbered {
                out.push_str(&(i + 1).to_string());
                out.push_str(". ");
            }
            out.push_str(&self.format_error(error));
        }
        out
    }

    fn format_result<E: ValidationError>(&self, result: &ValidationResult<E>) -> String {
        if result.is_valid() {
            return self.valid_label.clone();
        }

        let mut out = String::new();
        if let Some(header) = &self.header {
            out.push_str(header);
        }
        out.push_str(&self.format_errors(result.iter_errors()));
        out
    }
}
