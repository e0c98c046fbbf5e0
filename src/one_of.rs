//! Enumerated values with a human description each
//!
//! [`OneOfWithDescription`] restricts an attribute to a fixed set of values,
//! like a plain one-of check, but renders each allowed value with a short
//! explanation so the generated documentation tells users what the choices
//! mean.
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::one_of::{DescribedValue, OneOfWithDescription};
//!
//! let v = OneOfWithDescription::new([
//!     DescribedValue::new("tcp", "stream transport"),
//!     DescribedValue::new("udp", "datagram transport"),
//! ]);
//! assert_eq!(
//!     v.description(),
//!     r#"Value must be one of: "tcp" (stream transport), "udp" (datagram transport)"#
//! );
//! assert_eq!(
//!     v.markdown_description(),
//!     "Value must be one of: \n  - `tcp` stream transport\n  - `udp` datagram transport"
//! );
//! ```

use crate::validator::{known_value, ValidateRequest, ValidateResponse, Validator};
use crate::value::Value;

const DESCRIPTION_PREFIX: &str = "Value must be one of:";

/// An allowed value and what it means.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribedValue {
    /// The allowed value.
    pub value: Value,
    /// Short explanation shown in descriptions.
    pub description: String,
}

impl DescribedValue {
    /// Pair a value with its description.
    pub fn new(value: impl Into<Value>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }
}

/// The value must equal one of the described values.
///
/// An empty list of values accepts everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OneOfWithDescription {
    values: Vec<DescribedValue>,
}

impl OneOfWithDescription {
    /// Allow exactly `values`.
    pub fn new(values: impl IntoIterator<Item = DescribedValue>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Returns true when no value is configured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `value` is one of the allowed values.
    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|allowed| &allowed.value == value)
    }

    /// The allowed values, in order.
    pub fn values(&self) -> &[DescribedValue] {
        &self.values
    }
}

impl Validator for OneOfWithDescription {
    fn description(&self) -> String {
        let values = self
            .values
            .iter()
            .map(|v| format!("{} ({})", v.value, v.description))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{DESCRIPTION_PREFIX} {values}")
    }

    fn markdown_description(&self) -> String {
        let values: String = self
            .values
            .iter()
            .map(|v| format!("\n  - `{}` {}", v.value.unquoted(), v.description))
            .collect();
        format!("{DESCRIPTION_PREFIX} {values}")
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(value) = known_value(req) else {
            return;
        };
        if self.is_empty() || self.contains(value) {
            return;
        }

        resp.diagnostics.add_attribute_error(
            req.path.clone(),
            "Invalid Attribute Value Match",
            format!("Attribute {} {}, got: {}", req.path, self.description(), value),
        );
    }
}
