//! The core outcome container and its variant queries.

use crate::types::Outcome::{Failure, Success};

/// The explicit result of a computation: a success value or a failure value.
///
/// An outcome is always in exactly one of the two states, fixed at
/// construction. Combinators consume the receiver and produce a new value;
/// no variant is ever mutated in place.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the computation succeeded.
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if the computation failed.
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts into an `Option` over the success payload, consuming the
    /// outcome and discarding the failure value, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// Converts into an `Option` over the failure payload, consuming the
    /// outcome and discarding the success value, if any.
    pub fn failure(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(error) => Some(error),
        }
    }

    /// Borrows the payload, producing an outcome of references.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }
}
