use super::{find_trigger, invalid_configuration, markdown_reference};
use crate::path::PathExpression;
use crate::validator::{ValidateRequest, ValidateResponse, Validator};

/// The attribute must stay null while another attribute is set.
#[derive(Debug, Clone, PartialEq)]
pub struct NullIfAttributeIsSet {
    path_expression: PathExpression,
}

impl NullIfAttributeIsSet {
    /// Forbid this attribute whenever `path_expression` holds a value.
    pub fn new(path_expression: PathExpression) -> Self {
        Self { path_expression }
    }
}

impl Validator for NullIfAttributeIsSet {
    fn description(&self) -> String {
        format!("If {} attribute is set this attribute is NULL", self.path_expression)
    }

    fn markdown_description(&self) -> String {
        format!(
            "If {} attribute is set this attribute is **NULL**",
            markdown_reference(&self.path_expression)
        )
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if !req.value.is_known() {
            return;
        }

        if let Some((path, _)) = find_trigger(req, &self.path_expression, resp, |_| true) {
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
    use crate::value::Value;

    fn check(foo: Value, bar: Value) -> ValidateResponse {
        let config = Config::new([("foo", foo), ("bar", bar.clone())]);
        let req = ValidateRequest::new(&bar).with_config(&config).at(Path::root("bar"));
        let mut resp = ValidateResponse::new();
        NullIfAttributeIsSet::new(PathExpression::match_root("foo")).validate(&req, &mut resp);
        resp
    }

    #[test]
    fn test_conflict() {
        let tags = Value::map([("env", "prod")]);
        let resp = check(Value::string("x"), tags);
        let diag = resp.diagnostics.iter().next().unwrap();
        assert_eq!(diag.path, Some(Path::root("foo")));
        assert_eq!(diag.detail, "If foo attribute is set this attribute is NULL");
    }

    #[test]
    fn test_no_conflict() {
        assert!(check(Value::Null, Value::string("x")).diagnostics.is_empty());
        assert!(check(Value::string("x"), Value::Null).diagnostics.is_empty());
        assert!(check(Value::string("x"), Value::Unknown).diagnostics.is_empty());
    }
}
