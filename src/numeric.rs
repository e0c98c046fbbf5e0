//! Integer validators.

use crate::conditional::invalid_configuration;
use crate::validator::{int_value, ValidateRequest, ValidateResponse, Validator};

/// The integer must be a multiple of a fixed divider.
///
/// Works on both int32 and int64 values.
///
/// ```rust
/// use attr_validators::prelude::*;
/// use attr_validators::numeric::ZeroRemainder;
///
/// let v = ZeroRemainder::new(3);
/// assert!(v.check(&ValidateRequest::new(&Value::Int64(9))).is_success());
/// assert!(v.check(&ValidateRequest::new(&Value::Int32(10))).is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroRemainder {
    divider: i64,
}

impl ZeroRemainder {
    /// Require values divisible by `divider`.
    pub fn new(divider: i64) -> Self {
        Self { divider }
    }

    /// The configured divider.
    pub fn divider(&self) -> i64 {
        self.divider
    }
}

impl Validator for ZeroRemainder {
    fn description(&self) -> String {
        format!(
            "This attribute needs to be divisible by {} with zero remainder.",
            self.divider
        )
    }

    fn validate(&self, req: &ValidateRequest<'_>, resp: &mut ValidateResponse) {
        let Some(value) = int_value(req, resp) else {
            return;
        };

        if self.divider == 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %req.path, "zero remainder validator configured with a zero divider");
            resp.diagnostics.add_error(
                invalid_configuration(&req.path),
                "the divider must not be 0",
            );
            return;
        }

        if value.checked_rem(self.divider).unwrap_or(0) != 0 {
            resp.diagnostics.add_attribute_error(
                req.path.clone(),
                format!(
                    "This value has a non-zero remainder when divided by {}.",
                    self.divider
                ),
                self.description(),
            );
        }
    }
}

/// Constructor functions shared by the `int32` and `int64` modules.
macro_rules! int_adapters {
    ($int:ty) => {
        use $crate::conditional::{
            AttributeIsDivisibleByAnInteger, OneOfWithDescriptionIfAttributeIsOneOf,
            RequireIfAttributeIsOneOf,
        };
        use $crate::not::Not;
        use $crate::numeric::ZeroRemainder;
        use $crate::one_of::{DescribedValue, OneOfWithDescription};
        use $crate::path::PathExpression;
        use $crate::validator::Validator;
        use $crate::value::Value;

        /// Divisible by `divider` with zero remainder.
        pub fn zero_remainder(divider: $int) -> ZeroRemainder {
            ZeroRemainder::new(i64::from(divider))
        }

        /// One of the given `(value, description)` pairs.
        pub fn one_of_with_description<I, D>(values: I) -> OneOfWithDescription
        where
            I: IntoIterator<Item = ($int, D)>,
            D: Into<String>,
        {
            OneOfWithDescription::new(described(values))
        }

        /// The integer at `path_expression` must divide by this attribute.
        pub fn attribute_is_divisible_by_an_integer(
            path_expression: PathExpression,
        ) -> AttributeIsDivisibleByAnInteger {
            AttributeIsDivisibleByAnInteger::new(path_expression)
        }

        /// Required while `path_expression` holds one of `expected_values`.
        pub fn require_if_attribute_is_one_of<E>(
            path_expression: PathExpression,
            expected_values: E,
        ) -> RequireIfAttributeIsOneOf
        where
            E: IntoIterator,
            E::Item: Into<Value>,
        {
            RequireIfAttributeIsOneOf::new(path_expression, expected_values)
        }

        /// One of the given pairs, only while `path_expression` holds one of `expected_values`.
        pub fn one_of_with_description_if_attribute_is_one_of<E, I, D>(
            path_expression: PathExpression,
            expected_values: E,
            values: I,
        ) -> OneOfWithDescriptionIfAttributeIsOneOf
        where
            E: IntoIterator,
            E::Item: Into<Value>,
            I: IntoIterator<Item = ($int, D)>,
            D: Into<String>,
        {
            OneOfWithDescriptionIfAttributeIsOneOf::new(
                path_expression,
                expected_values,
                described(values),
            )
        }

        /// Passes exactly when `validator` fails.
        pub fn not<V: Validator>(validator: V) -> Not<V> {
            Not::new(validator)
        }

        fn described<I, D>(values: I) -> impl Iterator<Item = DescribedValue>
        where
            I: IntoIterator<Item = ($int, D)>,
            D: Into<String>,
        {
            values
                .into_iter()
                .map(|(value, description)| DescribedValue::new(value, description))
        }
    };
}

pub(crate) use int_adapters;
