//! Well-known string encodings and identifiers.

use base64::Engine;

use super::pattern::{URN, UUID_V4};
use super::rules::{impl_rule_name_traits, Comparator, Rule, RuleSet};
use crate::validator::{string_value, ValidateRequest, ValidateResponse, Validator};

/// A format the value must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatType {
    /// Standard, padded base64.
    #[cfg_attr(feature = "serde", serde(rename = "is_base64"))]
    Base64,
    /// A version 4 UUID.
    #[cfg_attr(feature = "serde", serde(rename = "is_uuid_v4"))]
    UuidV4,
    /// A URN.
    #[cfg_attr(feature = "serde", serde(rename = "is_urn"))]
    Urn,
}

impl Validator for FormatType {
    fn description(&self) -> String {
        match self {
            FormatType::Base64 => "must be a valid base64 string",
            FormatType::UuidV4 => "must be a valid UUID v4",
            FormatType::Urn => "must be a valid URN",
        }
        .to_string()
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(text) = string_value(req, resp) else {
            return;
        };

        let (summary, detail) = match self {
            FormatType::Base64 => {
                if base64::engine::general_purpose::STANDARD.decode(text).is_ok() {
                    return;
                }
                ("Failed to parse base64 string", format!("invalid value: {}", req.value))
            }
            FormatType::UuidV4 => {
                if UUID_V4.is_match(text) {
                    return;
                }
                ("Failed to parse UUID", "This value is not a valid (v4) UUID".to_string())
            }
            FormatType::Urn => {
                if URN.is_match(text) {
                    return;
                }
                ("Failed to parse URN", "This value is not a valid URN".to_string())
            }
        };
        resp.diagnostics
            .add_attribute_error(req.path.clone(), summary, detail);
    }
}

impl Rule for FormatType {
    const FAMILY: &'static str = "formats";
    const ALL: &'static [Self] = &[FormatType::Base64, FormatType::UuidV4, FormatType::Urn];

    fn name(&self) -> &'static str {
        match self {
            FormatType::Base64 => "is_base64",
            FormatType::UuidV4 => "is_uuid_v4",
            FormatType::Urn => "is_urn",
        }
    }
}

impl_rule_name_traits!(FormatType);

/// Apply several [`FormatType`] checks joined by a [`Comparator`].
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::string::{Comparator, FormatType, Formats};
///
/// let v = Formats::new([FormatType::UuidV4, FormatType::Urn], Comparator::Any);
/// assert_eq!(
///     v.description(),
///     "The value must respect at least one of the following rules :\nmust be a valid UUID v4, must be a valid URN"
/// );
///
/// let urn = Value::string("urn:vcloud:org:0e3ee2f6-4a5b-4a1c-9a1a-2a6f4f9d9a11");
/// assert!(v.check(&ValidateRequest::new(&urn)).is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formats {
    rules: RuleSet<FormatType>,
}

impl Formats {
    /// Combine `rules` with `comparator`.
    pub fn new(rules: impl IntoIterator<Item = FormatType>, comparator: Comparator) -> Self {
        Self {
            rules: RuleSet::new(rules, comparator),
        }
    }

    /// Build from rule names such as `is_base64`.
    pub fn from_names<I, S>(names: I, comparator: Comparator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rules: RuleSet::from_names(names, comparator),
        }
    }

    /// The configured rules.
    pub fn rules(&self) -> &RuleSet<FormatType> {
        &self.rules
    }
}

impl Validator for Formats {
    fn description(&self) -> String {
        let rules = self.rules.descriptions(false);
        match (rules.len(), self.rules.comparator()) {
            (0, _) => "invalid configuration".to_string(),
            (1, _) => format!("The value must respect the following rule : {}", rules[0]),
            (_, Comparator::Any) => format!(
                "The value must respect at least one of the following rules :\n{}",
                rules.join(", ")
            ),
            (_, Comparator::All) => format!(
                "The value must respect all of the following rules :\n{}",
                rules.join(", ")
            ),
        }
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        self.rules.validate(req, resp);
    }
}
