//! Named rule sets combined with AND / OR
//!
//! [`Cases`](super::Cases), [`Formats`](super::Formats) and
//! [`IsNetwork`](super::IsNetwork) all apply a list of named sub-checks to one
//! string. Each family is an enum implementing [`Rule`]; a [`RuleSet`] holds
//! the configured rules and the [`Comparator`] joining them.
//!
//! - [`Comparator::All`]: every failing rule reports its own diagnostics.
//! - [`Comparator::Any`]: the individual diagnostics are dropped, and a single
//!   error is reported only if every rule failed.
//!
//! Rule names usually come from user-facing configuration, so a set can be
//! built from strings with [`RuleSet::from_names`]. Unrecognized names are
//! kept and reported when the set is used.

use std::fmt;

use crate::conditional::invalid_configuration;
use crate::diag::Diagnostics;
use crate::validator::{string_value, ValidateRequest, ValidateResponse, Validator};

/// How the rules of a set are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Comparator {
    /// Every rule must pass.
    #[default]
    All,
    /// At least one rule must pass.
    Any,
}

/// A named sub-check belonging to a rule family.
pub trait Rule: Validator + Copy + fmt::Debug + 'static {
    /// Family name used in diagnostics, e.g. `network`.
    const FAMILY: &'static str;

    /// Every rule of the family.
    const ALL: &'static [Self];

    /// The rule's configuration name, e.g. `ipv4_with_cidr`.
    fn name(&self) -> &'static str;

    /// Look a rule up by its configuration name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.name() == name)
    }
}

/// Error returned when parsing an unknown rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRule {
    /// The rule family.
    pub family: &'static str,
    /// The name that did not match.
    pub name: String,
}

impl fmt::Display for UnknownRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} type: {}", self.family, self.name)
    }
}

impl std::error::Error for UnknownRule {}

/// `Display` and `FromStr` through [`Rule::name`] and [`Rule::from_name`].
macro_rules! impl_rule_name_traits {
    ($rule:ty) => {
        impl ::std::fmt::Display for $rule {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::string::Rule::name(self))
            }
        }

        impl ::std::str::FromStr for $rule {
            type Err = $crate::string::UnknownRule;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                <$rule as $crate::string::Rule>::from_name(name).ok_or_else(|| {
                    $crate::string::UnknownRule {
                        family: <$rule as $crate::string::Rule>::FAMILY,
                        name: name.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use impl_rule_name_traits;

/// One configured entry of a [`RuleSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEntry<R> {
    /// A rule of the family.
    Known(R),
    /// A name that matched no rule.
    Unrecognized(String),
}

/// Ordered rules and the comparator joining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet<R> {
    entries: Vec<RuleEntry<R>>,
    comparator: Comparator,
}

impl<R: Rule> RuleSet<R> {
    /// A set of known rules.
    pub fn new(rules: impl IntoIterator<Item = R>, comparator: Comparator) -> Self {
        Self {
            entries: rules.into_iter().map(RuleEntry::Known).collect(),
            comparator,
        }
    }

    /// A set built from rule names; unknown names are reported at validation time.
    pub fn from_names<I, S>(names: I, comparator: Comparator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                R::from_name(name).map_or_else(|| RuleEntry::Unrecognized(name.to_string()), RuleEntry::Known)
            })
            .collect();
        Self {
            entries,
            comparator,
        }
    }

    /// Replace the comparator.
    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    /// The comparator.
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// The configured entries, in order.
    pub fn entries(&self) -> &[RuleEntry<R>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no rule is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-entry descriptions; unrecognized entries render as their name.
    pub(crate) fn descriptions(&self, markdown: bool) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| match entry {
                RuleEntry::Known(rule) if markdown => rule.markdown_description(),
                RuleEntry::Known(rule) => rule.description(),
                RuleEntry::Unrecognized(name) => name.clone(),
            })
            .collect()
    }

    pub(crate) fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if string_value(req, resp).is_none() {
            return;
        }

        if self.entries.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %req.path, family = R::FAMILY, "rule set is empty");
            resp.diagnostics.add_error(
                invalid_configuration(&req.path),
                format!("Set at least one {} type", R::FAMILY),
            );
            return;
        }

        let mut rules = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match entry {
                RuleEntry::Known(rule) => rules.push(*rule),
                RuleEntry::Unrecognized(name) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(path = %req.path, family = R::FAMILY, %name, "unrecognized rule name");
                    resp.diagnostics.add_error(
                        format!("Invalid {} type", R::FAMILY),
                        format!("invalid {} type: {name}", R::FAMILY),
                    );
                    return;
                }
            }
        }

        let mut collected = Diagnostics::new();
        let mut failed = 0;
        for rule in &rules {
            let mut sub = ValidateResponse::new();
            rule.validate(req, &mut sub);
            if sub.diagnostics.has_error() {
                failed += 1;
            }
            collected.append(sub.diagnostics);
        }

        match self.comparator {
            Comparator::All => resp.diagnostics.append(collected),
            Comparator::Any if failed == rules.len() => {
                resp.diagnostics.add_error(
                    invalid_configuration(&req.path),
                    format!("Set at least one valid {} type", R::FAMILY),
                );
            }
            Comparator::Any => {}
        }
    }
}
