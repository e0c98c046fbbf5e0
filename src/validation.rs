//! Error-accumulating validation results
//!
//! [`Validation`] is the `Result`-like value returned by
//! [`ValidatorExt::check`](crate::ValidatorExt::check) and
//! [`validate_all`](crate::validate_all). Unlike `Result`, combining two
//! failures keeps both error collections, so running a whole list of
//! validators reports every diagnostic at once.
//!
//! # Example
//!
//! ```
//! use attr_validators::Validation;
//!
//! let port = Validation::<_, Vec<&str>>::success(8080);
//! let proto = Validation::<&str, _>::failure(vec!["unknown protocol"]);
//! let range = Validation::<&str, _>::failure(vec!["empty range"]);
//!
//! let all = port.and(proto).and(range);
//! assert_eq!(all, Validation::Failure(vec!["unknown protocol", "empty range"]));
//! ```

use crate::Semigroup;

/// Either a successful value or the errors accumulated so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Every check passed.
    Success(T),
    /// At least one check failed.
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation.
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert from a `Result`.
    ///
    /// ```
    /// use attr_validators::Validation;
    ///
    /// let v: Validation<u16, String> = Validation::from_result("80".parse::<u16>().map_err(|e| e.to_string()));
    /// assert_eq!(v, Validation::Success(80));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Returns true on success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Returns true on failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the accumulated errors.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two validations, combining the errors when both fail.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Run a dependent validation only after this one succeeded.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Collect a list of validations, accumulating every failure in order.
    ///
    /// ```
    /// use attr_validators::Validation;
    ///
    /// let checks = vec![
    ///     Validation::<(), _>::failure(vec!["first"]),
    ///     Validation::success(()),
    ///     Validation::failure(vec!["second"]),
    /// ];
    /// assert_eq!(Validation::all_vec(checks), Validation::Failure(vec!["first", "second"]));
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::with_capacity(validations.len());
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}
