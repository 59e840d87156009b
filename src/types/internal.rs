//! Errors raised by the library itself when an invariant would otherwise break.
//!
//! None of these are produced by caller code. They show up on the failed side
//! of a handler in place of a value or error that does not exist.

use core::any::{type_name, Any};
use core::fmt::{self, Display};
use std::error::Error;

/// A success slot would have held an absent value.
///
/// Produced by [`evaluate_option`](crate::evaluate_option) when the
/// computation returns `Ok(None)`, and by the checked constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullValue;

impl Display for NullValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("computation produced no value")
    }
}

impl Error for NullValue {}

/// An error slot would have held an absent error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NullError;

impl Display for NullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failure reported without an error")
    }
}

impl Error for NullError {}

/// A step was chained from an empty [`Entry`](crate::Entry).
///
/// This error stands in for "nothing upstream", so handlers never need a
/// third, empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoValuePresent;

impl Display for NoValuePresent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no value present")
    }
}

impl Error for NoValuePresent {}

/// A runtime type coercion between two unrelated types was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastError {
    from: &'static str,
    to: &'static str,
}

impl CastError {
    /// Describes a failed coercion from `T` to `U`.
    #[inline]
    pub fn new<T: ?Sized, U: ?Sized>() -> Self {
        Self { from: type_name::<T>(), to: type_name::<U>() }
    }

    /// Name of the source type.
    #[inline]
    pub const fn from_type(&self) -> &'static str {
        self.from
    }

    /// Name of the requested type.
    #[inline]
    pub const fn to_type(&self) -> &'static str {
        self.to
    }
}

impl Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot cast `{}` to `{}`", self.from, self.to)
    }
}

impl Error for CastError {}

/// A caller computation panicked instead of returning.
///
/// Panics are captured at the same boundary as returned errors so that a
/// chain always ends in a value or an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Builds the error from a payload returned by `std::panic::catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_owned(),
                None => String::from("Box<dyn Any>"),
            },
        };
        Self { message }
    }

    /// The panic message, when the payload was a string.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "computation panicked: {}", self.message)
    }
}

impl Error for Panicked {}
