//! Character-class restrictions.

use super::rules::{impl_rule_name_traits, Comparator, Rule, RuleSet};
use crate::validator::{string_value, ValidateRequest, ValidateResponse, Validator};

/// A class of characters the value must not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CaseType {
    /// No uppercase letters.
    DisallowUpper,
    /// No lowercase letters.
    DisallowLower,
    /// No ASCII digits.
    DisallowNumber,
    /// No ASCII whitespace.
    DisallowSpace,
}

impl CaseType {
    fn rejects(self, c: char) -> bool {
        match self {
            CaseType::DisallowUpper => c.is_uppercase(),
            CaseType::DisallowLower => c.is_lowercase(),
            CaseType::DisallowNumber => c.is_ascii_digit(),
            CaseType::DisallowSpace => c.is_ascii_whitespace(),
        }
    }

    fn summary(self) -> &'static str {
        match self {
            CaseType::DisallowUpper => "uppercase characters are not allowed",
            CaseType::DisallowLower => "lowercase characters are not allowed",
            CaseType::DisallowNumber => "number characters are not allowed",
            CaseType::DisallowSpace => "space characters are not allowed",
        }
    }
}

impl Validator for CaseType {
    fn description(&self) -> String {
        let class = match self {
            CaseType::DisallowUpper => "uppercase",
            CaseType::DisallowLower => "lowercase",
            CaseType::DisallowNumber => "number",
            CaseType::DisallowSpace => "space",
        };
        format!("disallow {class} characters")
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(text) = string_value(req, resp) else {
            return;
        };
        if text.chars().any(|c| self.rejects(c)) {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                self.summary(),
                format!("invalid value: {text}"),
            );
        }
    }
}

impl Rule for CaseType {
    const FAMILY: &'static str = "case";
    const ALL: &'static [Self] = &[
        CaseType::DisallowUpper,
        CaseType::DisallowLower,
        CaseType::DisallowNumber,
        CaseType::DisallowSpace,
    ];

    fn name(&self) -> &'static str {
        match self {
            CaseType::DisallowUpper => "disallow_upper",
            CaseType::DisallowLower => "disallow_lower",
            CaseType::DisallowNumber => "disallow_number",
            CaseType::DisallowSpace => "disallow_space",
        }
    }
}

impl_rule_name_traits!(CaseType);

/// Apply several [`CaseType`] restrictions; all of them by default.
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::string::{CaseType, Cases};
///
/// let v = Cases::new([CaseType::DisallowUpper, CaseType::DisallowSpace]);
/// assert_eq!(
///     v.description(),
///     "The value must respect the following rules : disallow uppercase characters, disallow space characters"
/// );
///
/// let value = Value::string("My Bucket");
/// match v.check(&ValidateRequest::new(&value)) {
///     Validation::Failure(diags) => assert_eq!(diags.error_count(), 2),
///     Validation::Success(()) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cases {
    rules: RuleSet<CaseType>,
}

impl Cases {
    /// Reject every listed character class.
    pub fn new(rules: impl IntoIterator<Item = CaseType>) -> Self {
        Self {
            rules: RuleSet::new(rules, Comparator::All),
        }
    }

    /// Build from rule names such as `disallow_upper`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: RuleSet::from_names(names, Comparator::All),
        }
    }

    /// Replace the comparator.
    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.rules = self.rules.with_comparator(comparator);
        self
    }

    /// The configured rules.
    pub fn rules(&self) -> &RuleSet<CaseType> {
        &self.rules
    }
}

impl Validator for Cases {
    fn description(&self) -> String {
        let rules = self.rules.descriptions(false);
        match rules.len() {
            0 => "invalid configuration".to_string(),
            1 => format!("The value must respect the following rule : {}", rules[0]),
            _ => format!(
                "The value must respect the following rules : {}",
                rules.join(", ")
            ),
        }
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        self.rules.validate(req, resp);
    }
}
