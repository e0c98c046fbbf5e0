//! Validators for string attributes
//!
//! The leaf checks live in submodules; the free functions below are the
//! entry points a schema author reaches for, grouped the way a provider
//! declares string attributes.
//!
//! # Example
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::string::{self, Comparator, NetworkType};
//!
//! let validators: Vec<BoxedValidator> = vec![
//!     string::is_network([NetworkType::Ipv4WithCidr], Comparator::All).boxed(),
//!     string::disallow_space().boxed(),
//! ];
//!
//! let value = Value::string("10.0.0.0/33");
//! let result = validate_all(&validators, &ValidateRequest::new(&value));
//! assert!(result.is_failure());
//! ```

mod cases;
mod formats;
mod http_code;
mod network;
mod pattern;
mod rules;

pub use cases::{CaseType, Cases};
pub use formats::{FormatType, Formats};
pub use http_code::{HttpCode, HttpCodeParams};
pub use network::{IsIp, IsNetwork, NetworkType};
pub use pattern::{is_mac_address, is_netmask, is_urn, is_uuid, MatchesRegex, PrefixContains};
pub use rules::{Comparator, Rule, RuleEntry, RuleSet, UnknownRule};

use crate::conditional::{
    NullIfAttributeIsOneOf, NullIfAttributeIsSet, OneOfWithDescriptionIfAttributeIsOneOf,
    RequireIfAttributeIsOneOf, RequireIfAttributeIsSet,
};
use crate::not::Not;
use crate::one_of::{DescribedValue, OneOfWithDescription};
use crate::path::PathExpression;
use crate::value::Value;
use crate::validator::Validator;

/// No uppercase letters.
pub fn disallow_upper() -> CaseType {
    CaseType::DisallowUpper
}

/// No lowercase letters.
pub fn disallow_lower() -> CaseType {
    CaseType::DisallowLower
}

/// No ASCII digits.
pub fn disallow_number() -> CaseType {
    CaseType::DisallowNumber
}

/// No ASCII whitespace.
pub fn disallow_space() -> CaseType {
    CaseType::DisallowSpace
}

/// Every listed case rule.
pub fn cases(rules: impl IntoIterator<Item = CaseType>) -> Cases {
    Cases::new(rules)
}

/// Format rules joined by `comparator`.
pub fn formats(rules: impl IntoIterator<Item = FormatType>, comparator: Comparator) -> Formats {
    Formats::new(rules, comparator)
}

/// Network rules joined by `comparator`.
pub fn is_network(
    rules: impl IntoIterator<Item = NetworkType>,
    comparator: Comparator,
) -> IsNetwork {
    IsNetwork::new(rules, comparator)
}

/// Any IPv4 or IPv6 literal.
pub fn is_ip() -> IsIp {
    IsIp
}

/// A registered HTTP status code within the enabled classes.
pub fn http_code(params: HttpCodeParams) -> HttpCode {
    HttpCode::new(params)
}

/// Must start with `prefix`.
pub fn prefix_contains(prefix: impl Into<String>) -> PrefixContains {
    PrefixContains::new(prefix)
}

/// One of the given `(value, description)` pairs.
pub fn one_of_with_description<I, S, D>(values: I) -> OneOfWithDescription
where
    I: IntoIterator<Item = (S, D)>,
    S: Into<String>,
    D: Into<String>,
{
    OneOfWithDescription::new(described(values))
}

/// One of the given pairs, only while `path_expression` holds one of `expected_values`.
pub fn one_of_with_description_if_attribute_is_one_of<E, I, S, D>(
    path_expression: PathExpression,
    expected_values: E,
    values: I,
) -> OneOfWithDescriptionIfAttributeIsOneOf
where
    E: IntoIterator,
    E::Item: Into<Value>,
    I: IntoIterator<Item = (S, D)>,
    S: Into<String>,
    D: Into<String>,
{
    OneOfWithDescriptionIfAttributeIsOneOf::new(path_expression, expected_values, described(values))
}

/// Required while `path_expression` holds one of `expected_values`.
pub fn require_if_attribute_is_one_of<E>(
    path_expression: PathExpression,
    expected_values: E,
) -> RequireIfAttributeIsOneOf
where
    E: IntoIterator,
    E::Item: Into<Value>,
{
    RequireIfAttributeIsOneOf::new(path_expression, expected_values)
}

/// Must be null while `path_expression` holds one of `expected_values`.
pub fn null_if_attribute_is_one_of<E>(
    path_expression: PathExpression,
    expected_values: E,
) -> NullIfAttributeIsOneOf
where
    E: IntoIterator,
    E::Item: Into<Value>,
{
    NullIfAttributeIsOneOf::new(path_expression, expected_values)
}

/// Required while `path_expression` is set.
pub fn require_if_attribute_is_set(path_expression: PathExpression) -> RequireIfAttributeIsSet {
    RequireIfAttributeIsSet::new(path_expression)
}

/// Must be null while `path_expression` is set.
pub fn null_if_attribute_is_set(path_expression: PathExpression) -> NullIfAttributeIsSet {
    NullIfAttributeIsSet::new(path_expression)
}

/// Passes exactly when `validator` fails.
pub fn not<V: Validator>(validator: V) -> Not<V> {
    Not::new(validator)
}

fn described<I, S, D>(values: I) -> impl Iterator<Item = DescribedValue>
where
    I: IntoIterator<Item = (S, D)>,
    S: Into<String>,
    D: Into<String>,
{
    values
        .into_iter()
        .map(|(value, description)| DescribedValue::new(Value::String(value.into()), description))
}
