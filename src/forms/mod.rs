// SPDX-License-Identifier: MPL-2.0
//! Field and form validation.
//!
//! Each field carries a [`FieldRules`] set. [`validate`] trims the raw input
//! and checks it in a fixed order, stopping at the first failure:
//!
//! 1. required
//! 2. minimum length
//! 3. maximum length
//! 4. email shape (email fields)
//! 5. URL syntax (URL fields)
//! 6. numeric range (number fields)
//! 7. pattern
//!
//! Failures are [`FieldError`] values carrying an i18n key and its
//! arguments, so the view decides how to word them.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Class a form group carries while its field is invalid.
pub const FORM_GROUP_ERROR_CLASS: &str = "app-form-group--error";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Input type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Url,
    Number,
}

/// Constraints for a single field.
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    kind: FieldKind,
    min: Option<f64>,
    max: Option<f64>,
    pattern: Option<Regex>,
}

impl FieldRules {
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    #[must_use]
    pub fn email() -> Self {
        Self::new(FieldKind::Email)
    }

    #[must_use]
    pub fn url() -> Self {
        Self::new(FieldKind::Url)
    }

    #[must_use]
    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Lower bound for number fields.
    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Upper bound for number fields.
    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Requires the value to contain a match for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Url,
    NotANumber,
    MinValue(f64),
    MaxValue(f64),
    Pattern,
}

impl FieldError {
    /// Fluent key of the message for this failure.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FieldError::Required => "field-error-required",
            FieldError::MinLength(_) => "field-error-min-length",
            FieldError::MaxLength(_) => "field-error-max-length",
            FieldError::Email => "field-error-email",
            FieldError::Url => "field-error-url",
            FieldError::NotANumber => "field-error-number",
            FieldError::MinValue(_) => "field-error-min-value",
            FieldError::MaxValue(_) => "field-error-max-value",
            FieldError::Pattern => "field-error-pattern",
        }
    }

    /// Arguments interpolated into the message.
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            FieldError::MinLength(min) => vec![("min", min.to_string())],
            FieldError::MaxLength(max) => vec![("max", max.to_string())],
            FieldError::MinValue(min) => vec![("min", min.to_string())],
            FieldError::MaxValue(max) => vec![("max", max.to_string())],
            FieldError::Required
            | FieldError::Email
            | FieldError::Url
            | FieldError::NotANumber
            | FieldError::Pattern => Vec::new(),
        }
    }

    /// Localized message.
    #[must_use]
    pub fn message(&self, i18n: &crate::i18n::fluent::I18n) -> String {
        let args = self.args();
        let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
        i18n.tr_with_args(self.i18n_key(), &args)
    }
}

/// Validates one raw input value against `rules`.
///
/// # Errors
///
/// Returns the first rule the trimmed value breaks.
pub fn validate(rules: &FieldRules, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    let length = value.chars().count();

    if rules.required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if let Some(min) = rules.min_length {
        if length < min {
            return Err(FieldError::MinLength(min));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Err(FieldError::MaxLength(max));
        }
    }

    // Everything below only judges non-empty input.
    if value.is_empty() {
        return Ok(());
    }

    match rules.kind {
        FieldKind::Email if !EMAIL_PATTERN.is_match(value) => return Err(FieldError::Email),
        FieldKind::Url if url::Url::parse(value).is_err() => return Err(FieldError::Url),
        FieldKind::Number => {
            let number: f64 = value.parse().map_err(|_| FieldError::NotANumber)?;
            if let Some(min) = rules.min {
                if number < min {
                    return Err(FieldError::MinValue(min));
                }
            }
            if let Some(max) = rules.max {
                if number > max {
                    return Err(FieldError::MaxValue(max));
                }
            }
        }
        FieldKind::Text | FieldKind::Email | FieldKind::Url => {}
    }

    if let Some(pattern) = &rules.pattern {
        if !pattern.is_match(value) {
            return Err(FieldError::Pattern);
        }
    }

    Ok(())
}

/// Named fields validated together on submit.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: Vec<(String, FieldRules)>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    #[must_use]
    pub fn rules(&self, name: &str) -> Option<&FieldRules> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules)
    }

    /// Validates a single field, as done when it loses focus. Unknown fields
    /// pass.
    ///
    /// # Errors
    ///
    /// Returns the field's first failure.
    pub fn validate_field(&self, name: &str, raw: &str) -> Result<(), FieldError> {
        self.rules(name).map_or(Ok(()), |rules| validate(rules, raw))
    }

    /// Validates every field. Missing values count as empty input.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its first failure, in field order.
    pub fn validate(
        &self,
        values: &HashMap<String, String>,
    ) -> Result<(), Vec<(String, FieldError)>> {
        let errors: Vec<(String, FieldError)> = self
            .fields
            .iter()
            .filter_map(|(name, rules)| {
                let raw = values.get(name).map_or("", String::as_str);
                validate(rules, raw).err().map(|e| (name.clone(), e))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace() {
        let rules = FieldRules::text().required();
        assert_eq!(validate(&rules, "   "), Err(FieldError::Required));
        assert_eq!(validate(&rules, " Bomba 3 "), Ok(()));
    }

    #[test]
    fn optional_empty_field_passes_every_rule() {
        let rules = FieldRules::email()
            .max_length(3)
            .pattern("^x$")
            .expect("valid pattern");
        assert_eq!(validate(&rules, ""), Ok(()));
    }

    #[test]
    fn min_length_is_checked_before_type() {
        // Zero-length optional input still fails a minimum length.
        let rules = FieldRules::email().min_length(5);
        assert_eq!(validate(&rules, "a@b"), Err(FieldError::MinLength(5)));
        assert_eq!(validate(&rules, ""), Err(FieldError::MinLength(5)));
    }

    #[test]
    fn lengths_count_characters_after_trim() {
        let rules = FieldRules::text().max_length(4);
        assert_eq!(validate(&rules, "  niño  "), Ok(()));
        assert_eq!(validate(&rules, "niños"), Err(FieldError::MaxLength(4)));
    }

    #[test]
    fn email_shape() {
        let rules = FieldRules::email();
        assert_eq!(validate(&rules, "tecnico@planta.com"), Ok(()));
        assert_eq!(validate(&rules, "tecnico@planta"), Err(FieldError::Email));
        assert_eq!(validate(&rules, "a b@c.d"), Err(FieldError::Email));
    }

    #[test]
    fn url_must_parse() {
        let rules = FieldRules::url();
        assert_eq!(validate(&rules, "https://example.com/manual.pdf"), Ok(()));
        assert_eq!(validate(&rules, "manual.pdf"), Err(FieldError::Url));
    }

    #[test]
    fn number_range() {
        let rules = FieldRules::number().min(1.0).max(24.0);
        assert_eq!(validate(&rules, "8"), Ok(()));
        assert_eq!(validate(&rules, "0.5"), Err(FieldError::MinValue(1.0)));
        assert_eq!(validate(&rules, "25"), Err(FieldError::MaxValue(24.0)));
        assert_eq!(validate(&rules, "ocho"), Err(FieldError::NotANumber));
    }

    #[test]
    fn pattern_matches_anywhere() {
        let rules = FieldRules::text().pattern(r"[A-Z]{3}-\d+").expect("valid pattern");
        assert_eq!(validate(&rules, "asset BOM-12"), Ok(()));
        assert_eq!(validate(&rules, "bom-12"), Err(FieldError::Pattern));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(FieldRules::text().pattern("(").is_err());
    }

    #[test]
    fn error_args_carry_bounds() {
        assert_eq!(
            FieldError::MinLength(3).args(),
            vec![("min", "3".to_string())]
        );
        assert_eq!(FieldError::MaxValue(2.5).args(), vec![("max", "2.5".to_string())]);
        assert!(FieldError::Email.args().is_empty());
        assert_eq!(FieldError::Required.i18n_key(), "field-error-required");
    }

    #[test]
    fn form_reports_every_failing_field() {
        let form = Form::new()
            .field("name", FieldRules::text().required())
            .field("email", FieldRules::email().required())
            .field("hours", FieldRules::number().min(1.0));

        let mut values = HashMap::new();
        values.insert("email".to_string(), "nope".to_string());
        values.insert("hours".to_string(), "0".to_string());

        let errors = form.validate(&values).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ("name".to_string(), FieldError::Required),
                ("email".to_string(), FieldError::Email),
                ("hours".to_string(), FieldError::MinValue(1.0)),
            ]
        );
    }

    #[test]
    fn form_validate_field_ignores_unknown_names() {
        let form = Form::new().field("name", FieldRules::text().required());
        assert_eq!(form.validate_field("other", ""), Ok(()));
        assert_eq!(form.validate_field("name", ""), Err(FieldError::Required));
    }
}
