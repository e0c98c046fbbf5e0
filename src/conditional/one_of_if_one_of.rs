use super::{find_trigger, invalid_configuration, is_one_of, markdown_reference};
use crate::describe::{markdown_list, plain_list};
use crate::one_of::{DescribedValue, OneOfWithDescription};
use crate::path::PathExpression;
use crate::validator::{ValidateRequest, ValidateResponse, Validator};
use crate::value::Value;

/// Restrict the attribute to a described set of values, but only while
/// another attribute holds one of the expected values.
///
/// Unlike the require/null family, the error lands on the attribute itself:
/// its value is the one out of range.
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::conditional::OneOfWithDescriptionIfAttributeIsOneOf;
/// use attr_validators::one_of::DescribedValue;
/// use attr_validators::path::{Path, PathExpression};
///
/// let v = OneOfWithDescriptionIfAttributeIsOneOf::new(
///     PathExpression::match_root("tier"),
///     ["premium"],
///     [DescribedValue::new(Value::Int64(1000), "1 Gb/s"), DescribedValue::new(Value::Int64(10000), "10 Gb/s")],
/// );
///
/// let config = Config::new([("tier", Value::string("premium")), ("bandwidth", Value::Int64(100))]);
/// let req = ValidateRequest::from_config(&config, Path::root("bandwidth")).unwrap();
/// assert!(v.check(&req).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OneOfWithDescriptionIfAttributeIsOneOf {
    path_expression: PathExpression,
    expected_values: Vec<Value>,
    allowed: OneOfWithDescription,
}

impl OneOfWithDescriptionIfAttributeIsOneOf {
    /// Only allow `values` while `path_expression` holds one of `expected_values`.
    pub fn new<I, V>(path_expression: PathExpression, expected_values: I, values: V) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
        V: IntoIterator<Item = DescribedValue>,
    {
        Self {
            path_expression,
            expected_values: expected_values.into_iter().map(Into::into).collect(),
            allowed: OneOfWithDescription::new(values),
        }
    }
}

impl Validator for OneOfWithDescriptionIfAttributeIsOneOf {
    fn description(&self) -> String {
        format!(
            "If {} attribute is set and the value {}, this attribute {}",
            self.path_expression,
            is_one_of(&self.expected_values, plain_list(&self.expected_values)),
            lowercase_first(&self.allowed.description())
        )
    }

    fn markdown_description(&self) -> String {
        format!(
            "If the value of {} attribute {}, this attribute {}",
            markdown_reference(&self.path_expression),
            is_one_of(&self.expected_values, markdown_list(&self.expected_values)),
            lowercase_first(&self.allowed.markdown_description())
        )
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if !req.value.is_known() || self.allowed.is_empty() {
            return;
        }
        if self.allowed.contains(req.value) {
            return;
        }

        let expected = &self.expected_values;
        if find_trigger(req, &self.path_expression, resp, |v| expected.contains(v)).is_some() {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                invalid_configuration(&req.path),
                format!("{}, got: {}", self.description(), req.value),
            );
        }
    }
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
