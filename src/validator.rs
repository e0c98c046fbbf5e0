//! The validate entry point
//!
//! Every validator in this crate implements [`Validator`]: it receives a
//! [`ValidateRequest`] (the attribute's value, where it lives, and the whole
//! configuration) and appends findings to a [`ValidateResponse`]. Nothing is
//! returned and nothing is mutated besides the response.
//!
//! [`ValidatorExt`] adds the combinators: `check` turns one run into a
//! [`Validation`], `not` inverts a validator, `boxed` erases its type so
//! heterogeneous validators can share a list for [`validate_all`].
//!
//! # Example
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::string;
//!
//! let validators: Vec<BoxedValidator> = vec![
//!     string::disallow_upper().boxed(),
//!     string::prefix_contains("web-").boxed(),
//! ];
//!
//! let value = Value::string("Api-1");
//! let result = validate_all(&validators, &ValidateRequest::new(&value));
//! match result {
//!     Validation::Failure(diags) => assert_eq!(diags.error_count(), 2),
//!     Validation::Success(()) => unreachable!(),
//! }
//! ```

use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::diag::Diagnostics;
use crate::not::Not;
use crate::path::{Path, PathExpression};
use crate::value::{Value, ValueKind};
use crate::Validation;

static EMPTY_CONFIG: Config = Config::empty();

/// Everything a validator may look at.
#[derive(Debug, Clone)]
pub struct ValidateRequest<'a> {
    /// The whole configuration.
    pub config: &'a Config,
    /// The value of the attribute being validated.
    pub value: &'a Value,
    /// Where the attribute lives.
    pub path: Path,
    /// Expression matching exactly `path`; relative references merge onto it.
    pub path_expression: PathExpression,
}

impl<'a> ValidateRequest<'a> {
    /// Validate a standalone value at the root path, against an empty configuration.
    pub fn new(value: &'a Value) -> Self {
        let path = Path::empty();
        Self {
            config: &EMPTY_CONFIG,
            value,
            path_expression: path.expression(),
            path,
        }
    }

    /// Validate the attribute stored at `path` in `config`.
    ///
    /// ```rust
    /// use attr_validators::{Config, ValidateRequest, Value};
    /// use attr_validators::path::Path;
    ///
    /// let config = Config::new([("name", Value::string("web"))]);
    /// let req = ValidateRequest::from_config(&config, Path::root("name")).unwrap();
    /// assert_eq!(req.value, &Value::string("web"));
    /// assert_eq!(req.path.to_string(), "name");
    /// ```
    pub fn from_config(config: &'a Config, path: Path) -> Result<Self, ConfigError> {
        let value = config.get_attribute(&path)?;
        Ok(Self {
            config,
            value,
            path_expression: path.expression(),
            path,
        })
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: &'a Config) -> Self {
        self.config = config;
        self
    }

    /// Place the attribute at `path`, updating the path expression to match.
    pub fn at(mut self, path: Path) -> Self {
        self.path_expression = path.expression();
        self.path = path;
        self
    }
}

/// Findings produced by one validator run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidateResponse {
    /// Everything reported so far.
    pub diagnostics: Diagnostics,
}

impl ValidateResponse {
    /// An empty response.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A check over one attribute value.
///
/// Implementations must be pure: the same request always yields the same
/// diagnostics, and validators hold no mutable state, so they can be shared
/// across threads.
pub trait Validator: Send + Sync {
    /// Plain-text description of the constraint.
    fn description(&self) -> String;

    /// Markdown description of the constraint; defaults to the plain one.
    fn markdown_description(&self) -> String {
        self.description()
    }

    /// Append diagnostics for `req` to `resp`.
    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse);
}

impl<V: Validator + ?Sized> Validator for &V {
    fn description(&self) -> String {
        (**self).description()
    }

    fn markdown_description(&self) -> String {
        (**self).markdown_description()
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        (**self).validate(req, resp)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn markdown_description(&self) -> String {
        (**self).markdown_description()
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        (**self).validate(req, resp)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn markdown_description(&self) -> String {
        (**self).markdown_description()
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        (**self).validate(req, resp)
    }
}

/// A type-erased validator.
pub type BoxedValidator = Box<dyn Validator>;

/// Combinators available on every [`Validator`].
pub trait ValidatorExt: Validator {
    /// Run the validator and fold the outcome into a [`Validation`].
    ///
    /// Warnings alone do not fail the validation.
    fn check(&self, req: &ValidateRequest<'_>) -> Validation<(), Diagnostics> {
        let mut resp = ValidateResponse::new();
        self.validate(req, &mut resp);
        if resp.diagnostics.has_error() {
            Validation::failure(resp.diagnostics)
        } else {
            Validation::success(())
        }
    }

    /// Invert the validator; see [`Not`].
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Erase the validator's type.
    fn boxed(self) -> BoxedValidator
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<V: Validator + ?Sized> ValidatorExt for V {}

/// Run every validator against the same request, accumulating all errors.
pub fn validate_all<V: Validator>(
    validators: &[V],
    req: &ValidateRequest<'_>,
) -> Validation<(), Diagnostics> {
    Validation::all_vec(validators.iter().map(|v| v.check(req)).collect()).map(|_| ())
}

pub(crate) const CONVERSION_ERROR: &str = "Value Conversion Error";

fn conversion_error(
    req: &ValidateRequest<'_>,
    resp: &mut ValidateResponse,
    expected: &str,
    found: Option<ValueKind>,
) {
    let found = found.map_or_else(|| "no value".to_string(), |kind| kind.to_string());
    resp.diagnostics.add_attribute_error(
        req.path.clone(),
        CONVERSION_ERROR,
        format!("expected {expected} value, got {found}"),
    );
}

/// The known value of the request, or `None` after logging the skip.
pub(crate) fn known_value<'a>(req: &ValidateRequest<'a>) -> Option<&'a Value> {
    if req.value.is_known() {
        return Some(req.value);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(path = %req.path, value = %req.value, "skipping validation of null or unknown value");
    None
}

/// The string content of a known string value.
///
/// Null and unknown values yield `None` silently; other kinds also report a
/// conversion error.
pub(crate) fn string_value<'a>(
    req: &ValidateRequest<'a>,
    resp: &mut ValidateResponse,
) -> Option<&'a str> {
    let value = known_value(req)?;
    let text = value.as_str();
    if text.is_none() {
        conversion_error(req, resp, "a string", value.kind());
    }
    text
}

/// The content of a known int32 or int64 value.
pub(crate) fn int_value(req: &ValidateRequest<'_>, resp: &mut ValidateResponse) -> Option<i64> {
    let value = known_value(req)?;
    let number = value.as_i64();
    if number.is_none() {
        conversion_error(req, resp, "an integer", value.kind());
    }
    number
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::Diagnostic;

    #[derive(Debug)]
    struct NonEmpty;

    impl Validator for NonEmpty {
        fn description(&self) -> String {
            "must not be empty".to_string()
        }

        fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
            if let Some(text) = string_value(req, resp) {
                if text.is_empty() {
                    resp.diagnostics
                        .add_attribute_error(req.path.clone(), "Empty", self.description());
                }
            }
        }
    }

    #[test]
    fn test_request_defaults() {
        let value = Value::string("x");
        let req = ValidateRequest::new(&value);
        assert!(req.path.is_empty());
        assert_eq!(req.config, &Config::empty());
        assert!(req.path_expression.is_root());
    }

    #[test]
    fn test_request_at_updates_expression() {
        let value = Value::Null;
        let path = Path::root("a").at_list_index(0);
        let req = ValidateRequest::new(&value).at(path.clone());
        assert!(req.path_expression.matches(&path));
    }

    #[test]
    fn test_from_config_missing_attribute() {
        let config = Config::empty();
        assert!(ValidateRequest::from_config(&config, Path::root("nope")).is_err());
    }

    #[test]
    fn test_check_success_and_failure() {
        let ok = Value::string("x");
        assert!(NonEmpty.check(&ValidateRequest::new(&ok)).is_success());
        let bad = Value::string("");
        assert!(NonEmpty.check(&ValidateRequest::new(&bad)).is_failure());
    }

    #[test]
    fn test_markdown_defaults_to_description() {
        assert_eq!(NonEmpty.markdown_description(), "must not be empty");
        assert_eq!(NonEmpty.boxed().markdown_description(), "must not be empty");
    }

    #[test]
    fn test_conversion_error() {
        let value = Value::Int64(3);
        let req = ValidateRequest::new(&value).at(Path::root("name"));
        let mut resp = ValidateResponse::new();
        NonEmpty.validate(&req, &mut resp);
        assert!(resp.diagnostics.contains(&Diagnostic::attribute_error(
            Path::root("name"),
            CONVERSION_ERROR,
            "expected a string value, got int64",
        )));
    }

    #[test]
    fn test_null_and_unknown_are_skipped() {
        for value in [Value::Null, Value::Unknown] {
            let mut resp = ValidateResponse::new();
            NonEmpty.validate(&ValidateRequest::new(&value), &mut resp);
            assert!(resp.diagnostics.is_empty());
        }
    }

    #[test]
    fn test_validate_all_accumulates() {
        let validators: Vec<BoxedValidator> = vec![NonEmpty.boxed(), Arc::new(NonEmpty).boxed()];
        let value = Value::string("");
        match validate_all(&validators, &ValidateRequest::new(&value)) {
            Validation::Failure(diags) => assert_eq!(diags.error_count(), 2),
            Validation::Success(()) => panic!("expected failure"),
        }
    }
}
