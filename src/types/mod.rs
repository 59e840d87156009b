//! Outcome and error types.
//!
//! This module provides the binary [`Outcome`] sum type, the erased [`Fault`]
//! payload stored on the error side of every handler, and the small error types
//! the library itself raises.
//!
//! # Examples
//!
//! ```
//! use solve_rail::{Fault, Outcome};
//!
//! let outcome: Outcome<Fault, i32> = Outcome::Solved(21);
//! let doubled = outcome.map_success(|v| v * 2);
//!
//! assert_eq!(doubled.success_or(0), 42);
//! ```
use smallvec::SmallVec;

pub mod fault;
pub mod internal;
pub mod marker;
pub mod outcome;

pub use fault::*;
pub use internal::*;
pub use marker::*;
pub use outcome::*;

/// SmallVec-backed collection used for accumulating secondary errors.
///
/// Uses inline storage for up to 1 element to avoid heap allocations
/// in the common case where at most one error is suppressed.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Outcome alias whose error side is an erased [`Fault`].
///
/// # Type Parameters
///
/// * `V` - The success value type
pub type FaultOutcome<V> = Outcome<Fault, V>;
