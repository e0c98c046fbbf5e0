//! Testing utilities for validator authors
//!
//! Assertion macros over the [`Validation`](crate::Validation) returned by
//! [`ValidatorExt::check`](crate::ValidatorExt::check), a [`run`] helper that
//! returns the raw diagnostics, and (behind the `proptest` feature)
//! [`Arbitrary`](proptest::arbitrary::Arbitrary) implementations for
//! [`Value`] and [`Validation`](crate::Validation).
//!
//! # Examples
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::{assert_failure, assert_success, string};
//!
//! let v = string::disallow_space();
//! assert_success!(v.check(&ValidateRequest::new(&Value::string("a_b"))));
//! assert_failure!(v.check(&ValidateRequest::new(&Value::string("a b"))));
//! ```

use crate::diag::Diagnostics;
use crate::validator::{ValidateRequest, ValidateResponse, Validator};
use crate::value::Value;

/// Run `validator` on a standalone `value` and return everything it reported.
///
/// ```rust
/// use attr_validators::testing::run;
/// use attr_validators::{string, Value};
///
/// let diags = run(&string::is_ip(), &Value::string("10.0.0"));
/// assert_eq!(diags.error_count(), 1);
/// ```
pub fn run<V: Validator + ?Sized>(validator: &V, value: &Value) -> Diagnostics {
    run_request(validator, &ValidateRequest::new(value))
}

/// Run `validator` on a prepared request.
pub fn run_request<V: Validator + ?Sized>(validator: &V, req: &ValidateRequest<'_>) -> Diagnostics {
    let mut resp = ValidateResponse::new();
    validator.validate(req, &mut resp);
    resp.diagnostics
}

/// Assert that a validation succeeds.
///
/// # Example
///
/// ```rust
/// use attr_validators::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_success!(val);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// # Example
///
/// ```rust
/// use attr_validators::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_failure!(val);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with exactly the given `(summary, detail)` errors.
///
/// Warnings are ignored; errors are compared in order.
///
/// # Example
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::{assert_diagnostics, string};
///
/// let v = string::is_ip();
/// assert_diagnostics!(
///     v.check(&ValidateRequest::new(&Value::string("nope"))),
///     [("Failed to parse IP address", "invalid value: \"nope\"")]
/// );
/// ```
#[macro_export]
macro_rules! assert_diagnostics {
    ($validation:expr, [$(($summary:expr, $detail:expr)),* $(,)?]) => {
        match $validation {
            $crate::Validation::Failure(diagnostics) => {
                let actual: ::std::vec::Vec<(::std::string::String, ::std::string::String)> =
                    diagnostics
                        .errors()
                        .map(|d| (d.summary.clone(), d.detail.clone()))
                        .collect();
                let expected: ::std::vec::Vec<(::std::string::String, ::std::string::String)> =
                    ::std::vec![$((::std::string::String::from($summary), ::std::string::String::from($detail))),*];
                assert_eq!(actual, expected);
            }
            $crate::Validation::Success(v) => {
                panic!("Expected Failure with diagnostics, got Success: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::Validation;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary,
    E: Arbitrary,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::success),
            any_with::<E>(e_params).prop_map(Validation::failure),
        ]
        .boxed()
    }
}

/// Null, unknown, scalars and up to three levels of nested collections.
#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            Just(Value::Null),
            Just(Value::Unknown),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(Value::Int32),
            any::<i64>().prop_map(Value::Int64),
            (-1.0e6..1.0e6f64).prop_map(Value::Float64),
            (-1.0e6..1.0e6f64).prop_map(Value::Number),
            "[a-zA-Z0-9 ._:/-]{0,16}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Set),
                prop::collection::btree_map("[a-z]{1,6}", inner.clone(), 0..4)
                    .prop_map(Value::Map),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Object),
            ]
        })
        .boxed()
    }
}
