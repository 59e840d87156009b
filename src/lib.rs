//! Chain fallible computations through typed handlers.
//!
//! A computation that may fail is run once, at the start of a chain, and its
//! outcome is carried through `map`, `solve`, `catch_error` and friends until
//! a terminal operator extracts a value or hands the error back. No step needs
//! its own `match`.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `solve_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Evaluating and Transforming
//!
//! ```
//! use solve_rail::evaluate;
//!
//! let len = evaluate(|| Ok::<_, std::io::Error>("OK"))
//!     .map(str::len)
//!     .value_or(0);
//!
//! assert_eq!(len, 2);
//! ```
//!
//! ## Recovering From One Error Type
//!
//! ```
//! use solve_rail::evaluate;
//! use std::io;
//!
//! let value = evaluate(|| Err::<&str, _>(io::Error::other("FAIL")))
//!     .catch_error_as(|_: io::Error| "recovered")
//!     .value_or("x");
//!
//! assert_eq!(value, "recovered");
//! ```
//!
//! ## Scoped Resources
//!
//! ```
//! use solve_rail::{Fault, ResourceHandler, Scoped};
//! use std::cell::Cell;
//!
//! let closed = Cell::new(false);
//! let file = Scoped::new(vec![b'a', b'b'], |_: Vec<u8>| {
//!     closed.set(true);
//!     Ok::<(), Fault>(())
//! });
//!
//! let handler = ResourceHandler::from_resource(file)
//!     .effect(|_| Err::<(), _>(Fault::msg("read failed")));
//!
//! assert!(closed.get());
//! assert_eq!(handler.error().unwrap().to_string(), "read failed");
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`]
//! - `tracing`: debug and warning events for captured failures and resource release
//! - `full`: both of the above
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Starting points of a chain: `evaluate`, `wrap` and [`Entry`]
pub mod entry;
/// Value, effect and resource handlers
pub mod handler;
/// Error handling macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for chaining
pub mod traits;
/// Outcome, Fault and the library's own error types
pub mod types;

mod capture;
mod trace;

pub use entry::*;
pub use handler::{EffectHandler, ResourceHandler, ValueHandler};
pub use traits::*;
pub use types::{
    BoxError, CastError, Chain, ErrorVec, Expected, Fault, FaultOutcome, NoValuePresent, NullError,
    NullValue, Outcome, Panicked, UnwrapFailure, WrapException,
};
