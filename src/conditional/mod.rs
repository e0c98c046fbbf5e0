//! Cross-attribute validators
//!
//! These validators look beyond the attribute they are attached to. Each one
//! holds a [`PathExpression`] pointing at another attribute. That expression
//! is merged onto the position of the attribute being validated, so a
//! relative expression such as `<.mode` names a sibling in the same list
//! element. The merged expression is then expanded against the
//! configuration, and the referenced values are scanned in tree order:
//!
//! - no path at all is an error (`Path must be set`);
//! - an unreadable path is an error, and scanning stops;
//! - a null or unknown referenced value cannot decide anything, so scanning
//!   stops silently;
//! - the first known value satisfying the validator's trigger wins.
//!
//! # Example
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::conditional::RequireIfAttributeIsOneOf;
//! use attr_validators::path::{Path, PathExpression};
//!
//! let config = Config::new([
//!     ("mode", Value::string("tls")),
//!     ("certificate", Value::Null),
//! ]);
//! let validator = RequireIfAttributeIsOneOf::new(
//!     PathExpression::match_root("mode"),
//!     [Value::string("tls"), Value::string("mtls")],
//! );
//!
//! let req = ValidateRequest::from_config(&config, Path::root("certificate")).unwrap();
//! let mut resp = ValidateResponse::new();
//! validator.validate(&req, &mut resp);
//!
//! let diag = resp.diagnostics.iter().next().unwrap();
//! assert_eq!(diag.path, Some(Path::root("mode")));
//! assert_eq!(diag.summary, "Invalid configuration for attribute certificate");
//! assert_eq!(
//!     diag.detail,
//!     r#"If mode attribute is set and the value is one of "tls", "mtls" this attribute is REQUIRED"#
//! );
//! ```

mod divisible_by;
mod null_if_one_of;
mod null_if_set;
mod one_of_if_one_of;
mod require_if_one_of;
mod require_if_set;

pub use divisible_by::AttributeIsDivisibleByAnInteger;
pub use null_if_one_of::NullIfAttributeIsOneOf;
pub use null_if_set::NullIfAttributeIsSet;
pub use one_of_if_one_of::OneOfWithDescriptionIfAttributeIsOneOf;
pub use require_if_one_of::RequireIfAttributeIsOneOf;
pub use require_if_set::RequireIfAttributeIsSet;

use crate::path::{Path, PathExpression};
use crate::validator::{ValidateRequest, ValidateResponse};
use crate::value::Value;

/// Summary shared by every conditional diagnostic.
pub(crate) fn invalid_configuration(path: &Path) -> String {
    format!("Invalid configuration for attribute {path}")
}

/// `[`expr`](#expr)`: a Markdown link to the referenced attribute.
pub(crate) fn markdown_reference(expression: &PathExpression) -> String {
    format!("[`{expression}`](#{expression})")
}

/// "is X" for a single value, "is one of X, Y" otherwise.
pub(crate) fn is_one_of(values: &[Value], rendered: String) -> String {
    if values.len() == 1 {
        format!("is {rendered}")
    } else {
        format!("is one of {rendered}")
    }
}

/// Scan the values `reference` points at, relative to the attribute in `req`.
///
/// Returns the first referenced path whose known value satisfies `trigger`,
/// together with that value. Resolution problems are reported on `resp` and
/// yield `None`, as does a null or unknown referenced value.
pub(crate) fn find_trigger<'c>(
    req: &ValidateRequest<'c>,
    reference: &PathExpression,
    resp: &mut ValidateResponse,
    trigger: impl Fn(&Value) -> bool,
) -> Option<(Path, &'c Value)> {
    let config = req.config;
    let expression = req.path_expression.merge(reference);

    let paths = match config.path_matches(&expression) {
        Ok(paths) => paths,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %req.path, %expression, error = %err, "reference expression cannot be resolved");
            resp.diagnostics
                .add_error(invalid_configuration(&req.path), err.to_string());
            return None;
        }
    };

    if paths.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %req.path, %expression, "reference expression matches no attribute");
        resp.diagnostics
            .add_error(invalid_configuration(&req.path), "Path must be set");
        return None;
    }

    for path in paths {
        let Ok(value) = config.get_attribute(&path) else {
            resp.diagnostics.add_error(
                invalid_configuration(&req.path),
                format!("Unable to retrieve attribute path: {:?}", path.to_string()),
            );
            return None;
        };

        if !value.is_known() {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %req.path, reference = %path, "referenced attribute is not known yet");
            return None;
        }

        if trigger(value) {
            return Some((path, value));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn config() -> Config {
        Config::new([
            ("a", Value::string("x")),
            ("b", Value::Null),
            (
                "items",
                Value::list([
                    Value::object([("k", Value::string("no"))]),
                    Value::object([("k", Value::string("yes"))]),
                    Value::object([("k", Value::Unknown)]),
                ]),
            ),
        ])
    }

    #[test]
    fn test_is_one_of_wording() {
        assert_eq!(is_one_of(&[Value::Bool(true)], "true".into()), "is true");
        assert_eq!(
            is_one_of(&[Value::Bool(true), Value::Bool(false)], "true, false".into()),
            "is one of true, false"
        );
    }

    #[test]
    fn test_markdown_reference() {
        let expr = PathExpression::match_root("a").at_name("b");
        assert_eq!(markdown_reference(&expr), "[`a.b`](#a.b)");
    }

    #[test]
    fn test_find_trigger_first_match_wins() {
        let config = config();
        let value = Value::Null;
        let req = ValidateRequest::new(&value).with_config(&config);
        let mut resp = ValidateResponse::new();
        let expr = PathExpression::match_root("items").at_any_list_index().at_name("k");

        let found = find_trigger(&req, &expr, &mut resp, |v| v == &Value::string("yes"));
        assert_eq!(
            found,
            Some((Path::root("items").at_list_index(1).at_name("k"), &Value::string("yes")))
        );
        assert!(resp.diagnostics.is_empty());
    }

    #[test]
    fn test_find_trigger_stops_at_unknown() {
        let config = config();
        let value = Value::Null;
        let req = ValidateRequest::new(&value).with_config(&config);
        let mut resp = ValidateResponse::new();
        let expr = PathExpression::match_root("items").at_any_list_index().at_name("k");

        assert_eq!(find_trigger(&req, &expr, &mut resp, |_| false), None);
        assert!(resp.diagnostics.is_empty());
    }

    #[test]
    fn test_find_trigger_null_reference_is_silent() {
        let config = config();
        let value = Value::Null;
        let req = ValidateRequest::new(&value).with_config(&config);
        let mut resp = ValidateResponse::new();

        assert_eq!(find_trigger(&req, &PathExpression::match_root("b"), &mut resp, |_| true), None);
        assert!(resp.diagnostics.is_empty());
    }

    #[test]
    fn test_find_trigger_no_path() {
        let config = config();
        let value = Value::Null;
        let req = ValidateRequest::new(&value)
            .with_config(&config)
            .at(Path::root("a"));
        let mut resp = ValidateResponse::new();

        assert_eq!(
            find_trigger(&req, &PathExpression::match_root("zz"), &mut resp, |_| true),
            None
        );
        let diag = resp.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid configuration for attribute a");
        assert_eq!(diag.detail, "Path must be set");
        assert_eq!(diag.path, None);
    }

    #[test]
    fn test_find_trigger_invalid_expression() {
        let config = config();
        let value = Value::Null;
        let req = ValidateRequest::new(&value)
            .with_config(&config)
            .at(Path::root("a"));
        let mut resp = ValidateResponse::new();
        let above_root = PathExpression::match_relative().at_parent().at_parent();

        assert_eq!(find_trigger(&req, &above_root, &mut resp, |_| true), None);
        assert_eq!(resp.diagnostics.error_count(), 1);
    }

    #[test]
    fn test_find_trigger_unreadable_path_stops_scan() {
        let config = Config::new([("weights", Value::set([f64::NAN, 0.5])), ("b", Value::Null)]);
        let value = Value::Null;
        let req = ValidateRequest::new(&value)
            .with_config(&config)
            .at(Path::root("b"));
        let mut resp = ValidateResponse::new();
        let expr = PathExpression::match_root("weights").at_any_set_value();

        assert_eq!(find_trigger(&req, &expr, &mut resp, |_| true), None);
        assert_eq!(resp.diagnostics.len(), 1);
        let diag = resp.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid configuration for attribute b");
        assert_eq!(diag.detail, r#"Unable to retrieve attribute path: "weights[Value(NaN)]""#);
    }

    #[test]
    fn test_find_trigger_relative_sibling() {
        let config = config();
        let value = Value::Null;
        let req = ValidateRequest::new(&value)
            .with_config(&config)
            .at(Path::root("items").at_list_index(1).at_name("other"));
        let mut resp = ValidateResponse::new();
        let sibling = PathExpression::match_relative().at_parent().at_name("k");

        let found = find_trigger(&req, &sibling, &mut resp, |_| true);
        assert_eq!(
            found.map(|(path, _)| path.to_string()),
            Some("items[1].k".to_string())
        );
    }

    #[cfg(feature = "tracing")]
    mod logging {
        use super::*;
        use crate::validator::Validator;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_unknown_reference_is_logged() {
            let config = config();
            let value = Value::Null;
            let req = ValidateRequest::new(&value).with_config(&config);
            let mut resp = ValidateResponse::new();
            let expr = PathExpression::match_root("items").at_list_index(2).at_name("k");

            assert_eq!(find_trigger(&req, &expr, &mut resp, |_| true), None);
            assert!(logs_contain("referenced attribute is not known yet"));
        }

        #[test]
        #[traced_test]
        fn test_missing_reference_is_logged() {
            let config = config();
            let value = Value::Null;
            let req = ValidateRequest::new(&value).with_config(&config);
            let mut resp = ValidateResponse::new();

            find_trigger(&req, &PathExpression::match_root("zz"), &mut resp, |_| true);
            assert!(logs_contain("reference expression matches no attribute"));
        }

        #[test]
        #[traced_test]
        fn test_skip_is_traced() {
            let value = Value::Unknown;
            let mut resp = ValidateResponse::new();
            crate::string::disallow_upper().validate(&ValidateRequest::new(&value), &mut resp);
            assert!(resp.diagnostics.is_empty());
            assert!(logs_contain("skipping validation of null or unknown value"));
        }
    }
}
