//! Explicit success/failure outcome type with combinators.
//!
//! This crate provides [`Outcome`], a two-variant container representing a
//! computation's result as either a success value or a failure value, plus a
//! fixed set of combinators for inspecting, transforming, and chaining
//! outcomes without relying on panics for ordinary control flow.
//!
//! # Core Types
//!
//! * [`Outcome`] - The success/failure container
//! * [`UnwrapFailure`] - The typed panic payload for extraction misuse
//! * [`Iter`] / [`IntoIter`] - Zero-or-one-element iteration over a success
//!
//! # Example
//!
//! ```rust
//! use outcome::Outcome::{self, Failure, Success};
//!
//! fn square_to_string(x: u64) -> Outcome<String, &'static str> {
//!     if x > 1000 {
//!         Failure("overflow")
//!     } else {
//!         Success((x * x).to_string())
//!     }
//! }
//!
//! assert_eq!(
//!     Success(2).and_then(square_to_string),
//!     Success("4".to_string()),
//! );
//! assert_eq!(
//!     Success(10_000).and_then(square_to_string),
//!     Failure("overflow"),
//! );
//! assert_eq!(Failure("bad").map(|x: u64| x * 2), Failure("bad"));
//! ```

mod combinators;
mod extract;

pub mod error;
pub mod iter;
pub mod types;

// Re-export the main types for convenience.
pub use {
    error::UnwrapFailure,
    iter::{IntoIter, Iter},
    types::Outcome,
};
