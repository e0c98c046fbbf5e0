//! # attr-validators
//!
//! Attribute validators for declarative infrastructure configuration.
//!
//! A provider schema attaches validators to attributes. At plan time each
//! validator receives the attribute's value, its path and the whole
//! configuration, and appends [`Diagnostic`]s describing what is wrong.
//! Values may be *null* or *unknown*; every validator skips them, so an
//! attribute that is absent or only known after apply is never rejected.
//!
//! The crate offers:
//! - leaf checks over strings and integers ([`string`], [`int32`], [`int64`],
//!   [`numeric`]);
//! - cross-attribute checks that read another attribute through a
//!   [`PathExpression`](path::PathExpression) ([`conditional`]);
//! - [`one_of::OneOfWithDescription`] and the [`not::Not`] combinator.
//!
//! ## Quick Example
//!
//! ```rust
//! use attr_validators::prelude::*;
//! use attr_validators::path::{Path, PathExpression};
//! use attr_validators::string::{self, Comparator, NetworkType};
//!
//! let config = Config::new([
//!     ("mode", Value::string("static")),
//!     ("address", Value::string("10.0.0.1/33")),
//! ]);
//!
//! let validators: Vec<BoxedValidator> = vec![
//!     string::is_network([NetworkType::Ipv4WithCidr], Comparator::All).boxed(),
//!     string::require_if_attribute_is_one_of(PathExpression::match_root("mode"), ["static"]).boxed(),
//! ];
//!
//! let req = ValidateRequest::from_config(&config, Path::root("address")).unwrap();
//! match validate_all(&validators, &req) {
//!     Validation::Success(()) => unreachable!(),
//!     Validation::Failure(diags) => {
//!         assert_eq!(diags.error_count(), 1);
//!         println!("{}", diags.iter().next().unwrap());
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod conditional;
pub mod config;
mod describe;
pub mod diag;
pub mod int32;
pub mod int64;
pub mod not;
pub mod numeric;
pub mod one_of;
pub mod path;
pub mod semigroup;
pub mod string;
pub mod testing;
pub mod validation;
pub mod validator;
pub mod value;

pub use config::{Config, ConfigError};
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{
    validate_all, BoxedValidator, ValidateRequest, ValidateResponse, Validator, ValidatorExt,
};
pub use value::{Value, ValueKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::diag::{Diagnostic, Diagnostics, Severity};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::{
        validate_all, BoxedValidator, ValidateRequest, ValidateResponse, Validator, ValidatorExt,
    };
    pub use crate::value::Value;
}
