//! Regex- and prefix-based string validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::validator::{string_value, ValidateRequest, ValidateResponse, Validator};

pub(crate) static URN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^urn:[A-Za-z0-9][A-Za-z0-9-]{0,31}:([A-Za-z0-9()+,\-.:=@;$_!*']|%[0-9A-Fa-f]{2})+$")
        .unwrap()
});

pub(crate) static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-4[a-fA-F0-9]{3}-[89abAB][a-fA-F0-9]{3}-[a-fA-F0-9]{12}$")
        .unwrap()
});

static UUID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?-u:\w){8}-(?-u:\w){4}-(?-u:\w){4}-(?-u:\w){4}-(?-u:\w){12}$").unwrap());

static MAC_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").unwrap());

static NETMASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(((255\.){3}(255|254|252|248|240|224|192|128|0+))",
        r"|((255\.){2}(255|254|252|248|240|224|192|128|0+)\.0)",
        r"|((255\.)(255|254|252|248|240|224|192|128|0+)(\.0+){2})",
        r"|((255|254|252|248|240|224|192|128|0+)(\.0+){3}))$",
    ))
    .unwrap()
});

/// The whole string must match a regular expression.
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::string::MatchesRegex;
///
/// let v = MatchesRegex::new(
///     "must be a lowercase slug",
///     r"^[a-z0-9-]+$",
///     "Invalid slug",
///     "only lowercase letters, digits and dashes are allowed",
/// )
/// .unwrap();
/// assert!(v.check(&ValidateRequest::new(&Value::string("edge-01"))).is_success());
/// assert!(v.check(&ValidateRequest::new(&Value::string("Edge 01"))).is_failure());
/// ```
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    description: String,
    regex: Regex,
    summary: String,
    detail: String,
}

impl MatchesRegex {
    /// Compile `pattern` into a validator reporting `summary` / `detail` on mismatch.
    pub fn new(
        description: impl Into<String>,
        pattern: &str,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(description, Regex::new(pattern)?, summary, detail))
    }

    /// Build from an already compiled regex.
    pub fn from_regex(
        description: impl Into<String>,
        regex: Regex,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            regex,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// The compiled pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Validator for MatchesRegex {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(text) = string_value(req, resp) else {
            return;
        };
        if !self.regex.is_match(text) {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                self.summary.clone(),
                self.detail.clone(),
            );
        }
    }
}

/// A URN such as `urn:isbn:0451450523`.
pub fn is_urn() -> MatchesRegex {
    MatchesRegex::from_regex(
        "must be a valid URN",
        URN.clone(),
        "Failed to parse URN",
        "This value is not a valid URN",
    )
}

/// Any 8-4-4-4-12 word-character UUID shape; see
/// [`FormatType::UuidV4`](super::FormatType::UuidV4) for a strict v4 check.
pub fn is_uuid() -> MatchesRegex {
    MatchesRegex::from_regex(
        "must be a valid UUID",
        UUID.clone(),
        "Failed to parse UUID",
        "This value is not a valid (v4) UUID",
    )
}

/// Six hex octets separated by `:` or `-`.
pub fn is_mac_address() -> MatchesRegex {
    MatchesRegex::from_regex(
        "must be a valid mac address",
        MAC_ADDRESS.clone(),
        "Failed to parse mac address",
        "This value is not a valid mac address",
    )
}

/// A dotted-quad IPv4 netmask with contiguous ones.
pub fn is_netmask() -> MatchesRegex {
    MatchesRegex::from_regex(
        "must be a valid netmask",
        NETMASK.clone(),
        "Failed to parse netmask",
        "This value is not a valid netmask",
    )
}

/// The string must start with a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixContains {
    prefix: String,
}

impl PrefixContains {
    /// Require `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Validator for PrefixContains {
    fn description(&self) -> String {
        format!("must start with {:?}", self.prefix)
    }

    fn markdown_description(&self) -> String {
        format!("This value must start with `{}`.", self.prefix)
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(text) = string_value(req, resp) else {
            return;
        };
        if !text.starts_with(&self.prefix) {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                "Does not start with prefix",
                format!(
                    "The value {} does not start with the prefix {:?}.",
                    req.value, self.prefix
                ),
            );
        }
    }
}
