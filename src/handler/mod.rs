//! Chainable handlers built on [`Outcome`](crate::Outcome).
//!
//! - [`ValueHandler`]: a value or an error, with value and error combinators
//! - [`EffectHandler`]: an error or nothing, for steps that produce no value
//! - [`ResourceHandler`]: a closable resource or an error, released exactly once
//!
//! Every combinator consumes the handler and returns a new one; callbacks run
//! immediately, in the caller's thread.
//!
//! # Examples
//!
//! ```
//! use solve_rail::{evaluate, Fault};
//!
//! let total = evaluate(|| Ok::<_, Fault>(vec![1, 2, 3]))
//!     .map(|v| v.iter().sum::<i32>())
//!     .filter(|sum| *sum > 0, |_| Fault::msg("empty"))
//!     .value_or(0);
//!
//! assert_eq!(total, 6);
//! ```

pub mod effect;
pub mod resource;
pub mod value;

pub use effect::EffectHandler;
pub use resource::ResourceHandler;
pub use value::ValueHandler;
