//! Validators for int64 attributes.
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::int64;
//!
//! let v = int64::one_of_with_description([(1, "one"), (2, "two")]);
//! assert!(v.check(&ValidateRequest::new(&Value::Int64(2))).is_success());
//! assert!(v.check(&ValidateRequest::new(&Value::Int32(2))).is_failure());
//! ```

crate::numeric::int_adapters!(i64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::path::Path;
    use crate::validator::{ValidateRequest, ValidatorExt};

    #[test]
    fn test_zero_remainder() {
        let v = zero_remainder(5);
        assert_eq!(v.divider(), 5);
        assert!(v.check(&ValidateRequest::new(&Value::Int64(25))).is_success());
        assert!(v.check(&ValidateRequest::new(&Value::Int64(26))).is_failure());
    }

    #[test]
    fn test_divisible_by() {
        let config = Config::new([("total", Value::Int64(100)), ("chunk", Value::Int64(30))]);
        let req = ValidateRequest::from_config(&config, Path::root("chunk")).unwrap();
        let v = attribute_is_divisible_by_an_integer(PathExpression::match_root("total"));
        assert!(v.check(&req).is_failure());
    }

    #[test]
    fn test_one_of_if_one_of() {
        let v = one_of_with_description_if_attribute_is_one_of(
            PathExpression::match_root("tier"),
            ["basic"],
            [(10, "ten"), (20, "twenty")],
        );
        let config = Config::new([("tier", Value::string("basic")), ("quota", Value::Int64(15))]);
        let req = ValidateRequest::from_config(&config, Path::root("quota")).unwrap();
        assert!(v.check(&req).is_failure());

        let config = Config::new([("tier", Value::string("pro")), ("quota", Value::Int64(15))]);
        let req = ValidateRequest::from_config(&config, Path::root("quota")).unwrap();
        assert!(v.check(&req).is_success());
    }

    #[test]
    fn test_require_and_not() {
        let config = Config::new([("mode", Value::Int64(1)), ("size", Value::Null)]);
        let req = ValidateRequest::from_config(&config, Path::root("size")).unwrap();
        let v = require_if_attribute_is_one_of(PathExpression::match_root("mode"), [1_i64]);
        assert!(v.check(&req).is_failure());

        let v = not(zero_remainder(2));
        assert!(v.check(&ValidateRequest::new(&Value::Int64(3))).is_success());
    }
}
