use super::{find_trigger, invalid_configuration, markdown_reference};
use crate::path::PathExpression;
use crate::validator::{ValidateRequest, ValidateResponse, Validator};

/// The attribute is required as soon as another attribute is set.
#[derive(Debug, Clone, PartialEq)]
pub struct RequireIfAttributeIsSet {
    path_expression: PathExpression,
}

impl RequireIfAttributeIsSet {
    /// Require this attribute whenever `path_expression` holds a value.
    pub fn new(path_expression: PathExpression) -> Self {
        Self { path_expression }
    }
}

impl Validator for RequireIfAttributeIsSet {
    fn description(&self) -> String {
        format!(
            "If {} attribute is set this attribute is REQUIRED",
            self.path_expression
        )
    }

    fn markdown_description(&self) -> String {
        format!(
            "If {} attribute is set this attribute is **REQUIRED**",
            markdown_reference(&self.path_expression)
        )
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if req.value.is_known() {
            return;
        }

        let Some((path, _)) = find_trigger(req, &self.path_expression, resp, |_| true) else {
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
