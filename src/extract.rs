//! Payload extraction, with typed panics on variant misuse.

use {
    crate::{
        error::UnwrapFailure,
        types::Outcome::{self, Failure, Success},
    },
    std::{fmt, panic},
};

impl<T, E> Outcome<T, E> {
    /// Returns the success payload.
    ///
    /// Panics with an [`UnwrapFailure`] carrying `msg` and the failure
    /// payload if the computation failed.
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => extraction_failed(Some(msg), &error),
        }
    }

    /// Returns the success payload.
    ///
    /// Panics with an [`UnwrapFailure`] carrying the failure payload if the
    /// computation failed.
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Success(value) => value,
            Failure(error) => extraction_failed(None, &error),
        }
    }

    /// Returns the success payload, or `default` if the computation failed.
    /// Never panics.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// Returns the success payload, or computes one from the failure payload.
    pub fn unwrap_or_else<O: FnOnce(E) -> T>(self, op: O) -> T {
        match self {
            Success(value) => value,
            Failure(error) => op(error),
        }
    }

    /// Returns the success payload, or the default value of the success type
    /// if the computation failed.
    ///
    /// Payload types without a `Default` implementation are rejected at
    /// compile time.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(_) => T::default(),
        }
    }

    /// Returns the failure payload.
    ///
    /// Panics with an [`UnwrapFailure`] carrying `msg` and the success
    /// payload if the computation succeeded.
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(value) => extraction_failed(Some(msg), &value),
            Failure(error) => error,
        }
    }

    /// Returns the failure payload.
    ///
    /// Panics with an [`UnwrapFailure`] carrying the success payload if the
    /// computation succeeded.
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Success(value) => extraction_failed(None, &value),
            Failure(error) => error,
        }
    }
}

#[cold]
#[inline(never)]
fn extraction_failed(message: Option<&str>, payload: &dyn fmt::Debug) -> ! {
    let failure = match message {
        Some(message) => UnwrapFailure::with_message(message, payload),
        None => UnwrapFailure::bare(payload),
    };
    panic::panic_any(failure)
}
