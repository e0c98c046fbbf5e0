use super::{find_trigger, invalid_configuration, markdown_reference};
use crate::path::PathExpression;
use crate::validator::{int_value, ValidateRequest, ValidateResponse, Validator, CONVERSION_ERROR};

/// The integer held by another attribute must be a multiple of this
/// attribute's value.
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::conditional::AttributeIsDivisibleByAnInteger;
/// use attr_validators::path::{Path, PathExpression};
///
/// let v = AttributeIsDivisibleByAnInteger::new(PathExpression::match_root("foo"));
///
/// let config = Config::new([("foo", Value::Int32(12)), ("bar", Value::Int32(6))]);
/// let req = ValidateRequest::from_config(&config, Path::root("bar")).unwrap();
/// assert!(v.check(&req).is_success());
///
/// let config = Config::new([("foo", Value::Int32(13)), ("bar", Value::Int32(6))]);
/// let req = ValidateRequest::from_config(&config, Path::root("bar")).unwrap();
/// assert!(v.check(&req).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeIsDivisibleByAnInteger {
    path_expression: PathExpression,
}

impl AttributeIsDivisibleByAnInteger {
    /// Check that the integer at `path_expression` divides by this attribute.
    pub fn new(path_expression: PathExpression) -> Self {
        Self { path_expression }
    }
}

impl Validator for AttributeIsDivisibleByAnInteger {
    fn description(&self) -> String {
        format!(
            "The value of {} attribute must be divisible by the value of this attribute",
            self.path_expression
        )
    }

    fn markdown_description(&self) -> String {
        format!(
            "The value of {} attribute must be divisible by the value of this attribute",
            markdown_reference(&self.path_expression)
        )
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(divisor) = int_value(req, resp) else {
            return;
        };

        let Some((path, dividend)) = find_trigger(req, &self.path_expression, resp, |_| true)
        else {
            return;
        };

        let Some(dividend) = dividend.as_i64() else {
            resp.diagnostics.add_attribute_error(
                path,
                CONVERSION_ERROR,
                format!("expected an integer value, got {dividend}"),
            );
            return;
        };

        if divisor == 0 {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                invalid_configuration(&req.path),
                format!("this attribute must not be 0 to divide {}", self.path_expression),
            );
            return;
        }

        // checked_rem only fails for i64::MIN % -1, which divides evenly
        if dividend.checked_rem(divisor).unwrap_or(0) != 0 {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                invalid_configuration(&req.path),
                format!(
                    "{}: {dividend} is not divisible by {divisor}",
                    self.description()
                ),
            );
        }
    }
}
