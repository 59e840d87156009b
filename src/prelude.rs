//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use solve_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fault!`]
//! - **Entry points**: [`evaluate`], [`evaluate_option`], [`evaluate_effect`], [`wrap`], [`empty`]
//! - **Types**: [`Entry`], [`ValueHandler`], [`EffectHandler`], [`ResourceHandler`], [`Fault`],
//!   [`Outcome`], [`Scoped`]
//! - **Traits**: [`Closable`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use solve_rail::prelude::*;
//!
//! fn port(raw: &str) -> Result<u16, Fault> {
//!     evaluate(|| raw.parse::<u16>())
//!         .filter(|p| *p != 0, |_| fault!("port 0 is reserved"))
//!         .value_or_raise()
//! }
//!
//! assert_eq!(port("8080").unwrap(), 8080);
//! assert_eq!(port("0").unwrap_err().to_string(), "port 0 is reserved");
//! ```

// Macros
pub use crate::fault;

// Entry points
pub use crate::entry::{empty, evaluate, evaluate_effect, evaluate_option, wrap, Entry};

// Core types
pub use crate::handler::{EffectHandler, ResourceHandler, ValueHandler};
pub use crate::types::{Fault, Outcome};

// Traits
pub use crate::traits::{Closable, Scoped};
