use super::{find_trigger, invalid_configuration, is_one_of, markdown_reference};
use crate::describe::{markdown_list, plain_list};
use crate::path::PathExpression;
use crate::validator::{ValidateRequest, ValidateResponse, Validator};
use crate::value::Value;

/// The attribute is required when another attribute holds one of the
/// expected values.
///
/// The error is attached to the referenced attribute, since that is the
/// setting the user has to reconcile with.
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::conditional::RequireIfAttributeIsOneOf;
/// use attr_validators::path::PathExpression;
///
/// let v = RequireIfAttributeIsOneOf::new(
///     PathExpression::match_root("foo"),
///     [Value::string("a"), Value::string("b"), Value::string("c")],
/// );
/// assert_eq!(
///     v.markdown_description(),
///     "If the value of [`foo`](#foo) attribute is one of `a`, `b` or `c` this attribute is **REQUIRED**"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequireIfAttributeIsOneOf {
    path_expression: PathExpression,
    expected_values: Vec<Value>,
}

impl RequireIfAttributeIsOneOf {
    /// Require this attribute when `path_expression` holds one of `expected_values`.
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

impl Validator for RequireIfAttributeIsOneOf {
    fn description(&self) -> String {
        format!(
            "If {} attribute is set and the value {} this attribute is REQUIRED",
            self.path_expression,
            is_one_of(&self.expected_values, plain_list(&self.expected_values))
        )
    }

    fn markdown_description(&self) -> String {
        format!(
            "If the value of {} attribute {} this attribute is **REQUIRED**",
            markdown_reference(&self.path_expression),
            is_one_of(&self.expected_values, markdown_list(&self.expected_values))
        )
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if req.value.is_known() {
            return;
        }

        // Unknown values still resolve the reference.
        let expected = &self.expected_values;
        let Some((path, _)) =
            find_trigger(req, &self.path_expression, resp, |v| expected.contains(v))
        else {
            return;
        };
        if req.value.is_null() {
            resp.diagnostics.add_attribute_error(
                path,
                invalid_configuration(&req.path),
                self.description(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::path::Path;

    fn run(config: &Config, value: Value, at: Path, v: &RequireIfAttributeIsOneOf) -> ValidateResponse {
        let req = ValidateRequest::new(&value).with_config(config).at(at);
        let mut resp = ValidateResponse::new();
        v.validate(&req, &mut resp);
        resp
    }

    #[test]
    fn test_description_single_value() {
        let v = RequireIfAttributeIsOneOf::new(PathExpression::match_root("foo"), ["excepted value"]);
        assert_eq!(
            v.description(),
            "If foo attribute is set and the value is \"excepted value\" this attribute is REQUIRED"
        );
        assert_eq!(
            v.markdown_description(),
            "If the value of [`foo`](#foo) attribute is `excepted value` this attribute is **REQUIRED**"
        );
    }

    #[test]
    fn test_required_when_reference_matches() {
        let config = Config::new([("foo", Value::string("excepted value")), ("bar", Value::Null)]);
        let v = RequireIfAttributeIsOneOf::new(PathExpression::match_root("foo"), ["excepted value"]);
        let resp = run(&config, Value::Null, Path::root("bar"), &v);

        assert_eq!(resp.diagnostics.error_count(), 1);
        let diag = resp.diagnostics.iter().next().unwrap();
        assert_eq!(diag.path, Some(Path::root("foo")));
        assert_eq!(diag.summary, "Invalid configuration for attribute bar");
    }

    #[test]
    fn test_set_value_is_fine() {
        let config = Config::new([("foo", Value::string("excepted value")), ("bar", Value::string("x"))]);
        let v = RequireIfAttributeIsOneOf::new(PathExpression::match_root("foo"), ["excepted value"]);
        assert!(run(&config, Value::string("x"), Path::root("bar"), &v).diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_self_is_skipped() {
        let config = Config::new([("foo", Value::string("excepted value")), ("bar", Value::Unknown)]);
        let v = RequireIfAttributeIsOneOf::new(PathExpression::match_root("foo"), ["excepted value"]);
        assert!(run(&config, Value::Unknown, Path::root("bar"), &v).diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_self_reports_missing_reference() {
        let config = Config::new([("bar", Value::Unknown)]);
        let v = RequireIfAttributeIsOneOf::new(PathExpression::match_root("missing"), ["x"]);
        let resp = run(&config, Value::Unknown, Path::root("bar"), &v);

        assert_eq!(resp.diagnostics.error_count(), 1);
        let diag = resp.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid configuration for attribute bar");
        assert_eq!(diag.detail, "Path must be set");
    }

    #[test]
    fn test_other_reference_value() {
        let config = Config::new([("foo", Value::string("other")), ("bar", Value::Null)]);
        let v = RequireIfAttributeIsOneOf::new(PathExpression::match_root("foo"), ["excepted value"]);
        assert!(run(&config, Value::Null, Path::root("bar"), &v).diagnostics.is_empty());
    }

    #[test]
    fn test_kind_aware_comparison() {
        let config = Config::new([("foo", Value::Int64(10)), ("bar", Value::Null)]);
        let v = RequireIfAttributeIsOneOf::new(PathExpression::match_root("foo"), [Value::Int32(10)]);
        assert!(run(&config, Value::Null, Path::root("bar"), &v).diagnostics.is_empty());
    }
}
