//! Core traits for chaining.
//!
//! - [`Closable`]: resources with an explicit, consuming release step, as
//!   held by [`ResourceHandler`](crate::ResourceHandler)
//!
//! # Examples
//!
//! ```
//! use solve_rail::traits::Closable;
//! use std::io::{BufWriter, Write};
//!
//! let mut writer = BufWriter::new(Vec::new());
//! writer.write_all(b"flushed on close").unwrap();
//! writer.close().unwrap();
//! ```

pub mod closable;

pub use closable::{Closable, Scoped};
