//! Resources with an explicit release step.
//!
//! [`Closable`] is the contract a [`ResourceHandler`](crate::ResourceHandler)
//! relies on: `close` consumes the resource, so releasing it twice cannot be
//! expressed.
//!
//! # Examples
//!
//! ```
//! use solve_rail::{Closable, ResourceHandler};
//! use std::cell::Cell;
//!
//! struct Connection<'a> {
//!     open: &'a Cell<bool>,
//! }
//!
//! impl Closable for Connection<'_> {
//!     type Error = std::io::Error;
//!
//!     fn close(self) -> Result<(), Self::Error> {
//!         self.open.set(false);
//!         Ok(())
//!     }
//! }
//!
//! let open = Cell::new(true);
//! let answer = ResourceHandler::from_resource(Connection { open: &open })
//!     .solve(|_conn| Ok::<_, std::io::Error>(42))
//!     .value_or(0);
//!
//! assert_eq!(answer, 42);
//! assert!(!open.get());
//! ```

use core::fmt::{self, Debug};
use core::ops::{Deref, DerefMut};
use std::io::{self, BufWriter, Write};

use crate::types::Fault;

/// A value with a release operation that must run exactly once.
pub trait Closable {
    /// Error produced when releasing fails.
    type Error: Into<Fault>;

    /// Releases the resource.
    ///
    /// # Errors
    ///
    /// Returns the release failure. The resource is gone either way.
    fn close(self) -> Result<(), Self::Error>;
}

/// Flushes buffered data; the inner writer is dropped afterwards.
impl<W: Write> Closable for BufWriter<W> {
    type Error = io::Error;

    fn close(self) -> Result<(), Self::Error> {
        self.into_inner().map(drop).map_err(io::IntoInnerError::into_error)
    }
}

/// A value paired with the closure that releases it.
///
/// Use this to give any value scoped-release semantics without writing a
/// [`Closable`] impl. The value is reachable through `Deref`/`DerefMut` while
/// held.
///
/// # Examples
///
/// ```
/// use solve_rail::{ResourceHandler, Scoped};
///
/// let mut log = Vec::new();
/// let handler = ResourceHandler::from_resource(Scoped::new(String::from("tmp"), |name: String| {
///     log.push(format!("removed {name}"));
///     Ok::<(), std::io::Error>(())
/// }));
///
/// let len = handler.solve(|name| Ok::<_, std::io::Error>(name.len())).value_or(0);
///
/// assert_eq!(len, 3);
/// assert_eq!(log, ["removed tmp"]);
/// ```
pub struct Scoped<T, F> {
    value: T,
    release: F,
}

impl<T, F> Scoped<T, F> {
    /// Pairs `value` with its `release` closure.
    #[inline]
    pub fn new(value: T, release: F) -> Self {
        Self { value, release }
    }
}

impl<T, F> Deref for Scoped<T, F> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F> DerefMut for Scoped<T, F> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Debug, F> Debug for Scoped<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped").field("value", &self.value).finish_non_exhaustive()
    }
}

impl<T, F, E> Closable for Scoped<T, F>
where
    F: FnOnce(T) -> Result<(), E>,
    E: Into<Fault>,
{
    type Error = E;

    #[inline]
    fn close(self) -> Result<(), E> {
        (self.release)(self.value)
    }
}
