//! HTTP status codes written as strings.

use crate::validator::{string_value, ValidateRequest, ValidateResponse, Validator};

/// Which status code classes are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HttpCodeParams {
    /// Informational responses.
    pub allow_1xx: bool,
    /// Successful responses.
    pub allow_2xx: bool,
    /// Redirection messages.
    pub allow_3xx: bool,
    /// Client error responses.
    pub allow_4xx: bool,
    /// Server error responses.
    pub allow_5xx: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CodeClass {
    pattern: &'static str,
    start: u16,
    end: u16,
}

// Status codes with a registered reason phrase.
fn is_registered(code: u16) -> bool {
    matches!(
        code,
        100..=103
            | 200..=208
            | 226
            | 300..=305
            | 307
            | 308
            | 400..=418
            | 421..=426
            | 428
            | 429
            | 431
            | 451
            | 500..=508
            | 510
            | 511
    )
}

/// The value must be a registered status code within an allowed class.
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::string::{HttpCode, HttpCodeParams};
///
/// let v = HttpCode::new(HttpCodeParams { allow_2xx: true, ..Default::default() });
/// assert_eq!(v.description(), "The allowed HTTP status code pattern is 2xx");
/// assert!(v.check(&ValidateRequest::new(&Value::string("204"))).is_success());
/// assert!(v.check(&ValidateRequest::new(&Value::string("404"))).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCode {
    params: HttpCodeParams,
    classes: Vec<CodeClass>,
}

impl HttpCode {
    /// Accept the classes enabled in `params`.
    pub fn new(params: HttpCodeParams) -> Self {
        let classes = [
            (params.allow_1xx, "1xx", 100),
            (params.allow_2xx, "2xx", 200),
            (params.allow_3xx, "3xx", 300),
            (params.allow_4xx, "4xx", 400),
            (params.allow_5xx, "5xx", 500),
        ]
        .into_iter()
        .filter(|(allowed, _, _)| *allowed)
        .map(|(_, pattern, start)| CodeClass {
            pattern,
            start,
            end: start + 99,
        })
        .collect();
        Self { params, classes }
    }

    /// The configured parameters.
    pub fn params(&self) -> HttpCodeParams {
        self.params
    }

    fn describe(&self, quote: &str) -> String {
        let patterns: Vec<String> = self
            .classes
            .iter()
            .map(|class| format!("{quote}{}{quote}", class.pattern))
            .collect();
        match patterns.len() {
            0 => String::new(),
            1 => format!("The allowed HTTP status code pattern is {}", patterns[0]),
            _ => format!(
                "The following HTTP status codes patterns are allowed: {}",
                patterns.join(", ")
            ),
        }
    }
}

impl Validator for HttpCode {
    fn description(&self) -> String {
        self.describe("")
    }

    fn markdown_description(&self) -> String {
        self.describe("`")
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(text) = string_value(req, resp) else {
            return;
        };

        let detail = match text.parse::<u16>() {
            Err(_) => format!("The value {text} is not a valid HTTP status code"),
            Ok(code) if !is_registered(code) => format!(
                "The value {text} is not a valid HTTP status code defined by the HTTP RFC9110"
            ),
            Ok(code) => {
                if self
                    .classes
                    .iter()
                    .any(|class| (class.start..=class.end).contains(&code))
                {
                    return;
                }
                format!("The value {text} is not a valid HTTP status code in the allowed ranges")
            }
        };
        resp.diagnostics
            .add_attribute_error(req.path.clone(), "Invalid HTTP code", detail);
    }
}
