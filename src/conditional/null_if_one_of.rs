use super::{find_trigger, invalid_configuration, is_one_of, markdown_reference};
use crate::describe::{markdown_list, plain_list};
use crate::path::PathExpression;
use crate::validator::{ValidateRequest, ValidateResponse, Validator};
use crate::value::Value;

/// The attribute must stay null when another attribute holds one of the
/// expected values.
#[derive(Debug, Clone, PartialEq)]
pub struct NullIfAttributeIsOneOf {
    path_expression: PathExpression,
    expected_values: Vec<Value>,
}

impl NullIfAttributeIsOneOf {
    /// Forbid this attribute when `path_expression` holds one of `expected_values`.
    pub fn new<I>(path_expression: PathExpression, expected_values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            path_expression,
            expected_values: expected_values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for NullIfAttributeIsOneOf {
    fn description(&self) -> String {
        format!(
            "If {} attribute is set and the value {} this attribute is NULL",
            self.path_expression,
            is_one_of(&self.expected_values, plain_list(&self.expected_values))
        )
    }

    fn markdown_description(&self) -> String {
        format!(
            "If the value of {} attribute {} this attribute is **NULL**",
            markdown_reference(&self.path_expression),
            is_one_of(&self.expected_values, markdown_list(&self.expected_values))
        )
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if !req.value.is_known() {
            return;
        }

        let expected = &self.expected_values;
        if let Some((path, _)) =
            find_trigger(req, &self.path_expression, resp, |v| expected.contains(v))
        {
            resp.diagnostics.add_attribute_error(
                path,
                invalid_configuration(&req.path),
                self.description(),
            );
        }
    }
}
