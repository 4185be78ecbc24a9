//! Combinators for transforming and chaining outcomes.
//!
//! Every operation here either reads the current variant or manufactures a
//! brand-new outcome; the receiver is consumed and never mutated. Operations
//! that transform one side carry the other side's payload forward unchanged.

use crate::types::Outcome::{self, Failure, Success};

impl<T, E> Outcome<T, E> {
    /// Maps an `Outcome<T, E>` to `Outcome<U, E>` by applying `op` to a
    /// success payload, leaving a failure payload untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Outcome<U, E> {
        match self {
            Success(value) => Success(op(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Applies `f` to a success payload, or returns `default` for a failure
    /// regardless of its payload.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Success(value) => f(value),
            Failure(_) => default,
        }
    }

    /// Applies `f` to a success payload, or `default` to a failure payload.
    pub fn map_or_else<U, D: FnOnce(E) -> U, F: FnOnce(T) -> U>(self, default: D, f: F) -> U {
        match self {
            Success(value) => f(value),
            Failure(error) => default(error),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<T, F>` by applying `op` to a
    /// failure payload, leaving a success payload untouched.
    pub fn map_err<F, O: FnOnce(E) -> F>(self, op: O) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(op(error)),
        }
    }

    /// Returns `other` if the computation succeeded, otherwise the receiver's
    /// failure. When both sides fail, the receiver's failure wins.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(_) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Calls `op` with the success payload, short-circuiting a failure.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, op: F) -> Outcome<U, E> {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error),
        }
    }

    /// Returns the receiver's success, otherwise `other`. When both sides
    /// fail, the later failure wins.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(_) => other,
        }
    }

    /// Calls `op` with the failure payload, short-circuiting a success.
    pub fn or_else<F, O: FnOnce(E) -> Outcome<T, F>>(self, op: O) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(error) => op(error),
        }
    }
}
