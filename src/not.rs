//! Negation of a validator
//!
//! [`Not`] passes exactly when the wrapped validator reports an error, and
//! reports an error exactly when the wrapped validator is satisfied. The
//! wrapped validator's own diagnostics are discarded either way.
//!
//! Null and unknown values are skipped before the wrapped validator runs, so
//! `Not` keeps the usual "nothing to check yet" behaviour instead of turning
//! every absent value into an error.
//!
//! Negating a validator that reads other attributes also negates its
//! resolution errors: a reference that cannot be resolved makes the inner
//! validator fail, so `Not` passes.
//!
//! # Example
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::string;
//!
//! let not_an_ip = string::is_ip().not();
//!
//! let value = Value::string("192.168.1.1");
//! assert!(not_an_ip.check(&ValidateRequest::new(&value)).is_failure());
//!
//! let value = Value::string("192.168.1");
//! assert!(not_an_ip.check(&ValidateRequest::new(&value)).is_success());
//! ```

use crate::validator::{known_value, ValidateRequest, ValidateResponse, Validator};

/// Inverts the outcome of the wrapped validator.
#[derive(Debug, Clone, PartialEq)]
pub struct Not<V> {
    inner: V,
}

impl<V: Validator> Not<V> {
    /// Wrap `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Unwrap.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validator> Validator for Not<V> {
    fn description(&self) -> String {
        format!("Value must not satisfy: {}", self.inner.description())
    }

    fn markdown_description(&self) -> String {
        format!("Value must not satisfy: {}", self.inner.markdown_description())
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        if known_value(req).is_none() {
            return;
        }

        let mut inner = ValidateResponse::new();
        self.inner.validate(req, &mut inner);
        if inner.diagnostics.has_error() {
            return;
        }

        resp.diagnostics.add_attribute_error(
            req.path.clone(),
            "Invalid Attribute Value",
            format!("the value must not satisfy: {}", self.inner.description()),
        );
    }
}
