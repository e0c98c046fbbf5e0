//! Associative combination of accumulated errors
//!
//! Validators never stop at the first problem: every diagnostic an attribute
//! produces is reported together. [`Semigroup`] is the operation that glues
//! two error collections into one, and [`Validation`](crate::Validation)
//! relies on it to accumulate failures.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Example
//!
//! ```
//! use attr_validators::{Diagnostics, Semigroup};
//!
//! let mut first = Diagnostics::new();
//! first.add_error("Invalid configuration", "Path must be set");
//! let mut second = Diagnostics::new();
//! second.add_warning("Deprecated", "use `port_range` instead");
//!
//! let all = first.combine(second);
//! assert_eq!(all.len(), 2);
//! assert_eq!(all.error_count(), 1);
//! ```

/// A type with an associative binary operation.
///
/// `combine` takes both sides by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another, `self` first.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
