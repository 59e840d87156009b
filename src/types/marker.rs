use core::fmt::{self, Debug, Display};
use std::error::Error;

use crate::types::Fault;

/// Which side of an outcome an unsafe extraction asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// A success value was requested.
    Value,
    /// An error was requested.
    Error,
}

/// Raised when a terminal "unsafe extract" is called on the wrong side.
///
/// Unlike [`Fault`], this type implements [`std::error::Error`], so it can be
/// returned through `?` into `Box<dyn Error>` or any error type that converts
/// from it. The stored error, when there was one, is kept as the
/// [`source`](Error::source).
///
/// # Examples
///
/// ```
/// use solve_rail::{evaluate, Expected, Fault};
///
/// let failure = evaluate(|| Err::<i32, _>(Fault::msg("boom")))
///     .try_value()
///     .unwrap_err();
///
/// assert_eq!(failure.expected(), Expected::Value);
/// assert_eq!(failure.cause().unwrap().to_string(), "boom");
/// ```
pub struct UnwrapFailure {
    expected: Expected,
    cause: Option<Fault>,
}

impl UnwrapFailure {
    /// A value was requested but the outcome holds `cause`.
    #[inline]
    pub fn missing_value(cause: Fault) -> Self {
        Self { expected: Expected::Value, cause: Some(cause) }
    }

    /// An error was requested but the outcome is solved.
    #[inline]
    pub fn missing_error() -> Self {
        Self { expected: Expected::Error, cause: None }
    }

    /// Which side the caller asked for.
    #[inline]
    pub const fn expected(&self) -> Expected {
        self.expected
    }

    /// The stored error that prevented extraction of a value.
    #[inline]
    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_ref()
    }

    /// Consumes the failure, returning the stored error.
    #[inline]
    pub fn into_cause(self) -> Option<Fault> {
        self.cause
    }
}

impl Display for UnwrapFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.expected, &self.cause) {
            (Expected::Value, Some(cause)) => {
                write!(f, "expected a value but found error: {cause}")
            },
            (Expected::Value, None) => f.write_str("expected a value but none was present"),
            (Expected::Error, _) => f.write_str("expected an error but the outcome was solved"),
        }
    }
}

impl Debug for UnwrapFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnwrapFailure")
            .field("expected", &self.expected)
            .field("cause", &self.cause)
            .finish()
    }
}

impl Error for UnwrapFailure {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|cause| {
            let error: &(dyn Error + 'static) = cause.as_error();
            error
        })
    }
}

/// Re-tags a stored error under a handler's declared error type.
///
/// A handler's error type parameter is a compile-time label; the stored error
/// may be of any type. When a caller asks for the error *as* the label type and
/// the stored error is something else, it is wrapped in a `WrapException`
/// (kept as the [`source`](Error::source)) and converted into the label type
/// through `From<WrapException>`.
///
/// # Examples
///
/// ```
/// use solve_rail::{evaluate, Fault, WrapException};
/// use std::fmt;
///
/// #[derive(Debug)]
/// enum AppError {
///     Parse(std::num::ParseIntError),
///     Other(WrapException),
/// }
///
/// impl fmt::Display for AppError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             AppError::Parse(e) => write!(f, "parse: {e}"),
///             AppError::Other(e) => write!(f, "other: {e}"),
///         }
///     }
/// }
///
/// impl std::error::Error for AppError {}
///
/// impl From<WrapException> for AppError {
///     fn from(e: WrapException) -> Self {
///         AppError::Other(e)
///     }
/// }
///
/// let err = evaluate(|| Err::<i32, AppError>(AppError::Parse("x".parse::<i32>().unwrap_err())))
///     .map_error(|_| Fault::msg("replaced"))
///     .value_or_raise_as()
///     .unwrap_err();
///
/// match err {
///     AppError::Other(wrapped) => assert_eq!(wrapped.cause().to_string(), "replaced"),
///     AppError::Parse(_) => unreachable!(),
/// }
/// ```
pub struct WrapException {
    cause: Fault,
}

impl WrapException {
    /// Wraps `cause`.
    #[inline]
    pub fn new(cause: Fault) -> Self {
        Self { cause }
    }

    /// The original error.
    #[inline]
    pub const fn cause(&self) -> &Fault {
        &self.cause
    }

    /// Consumes the wrapper, returning the original error.
    #[inline]
    pub fn into_cause(self) -> Fault {
        self.cause
    }
}

impl Display for WrapException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrapped error: {}", self.cause)
    }
}

impl Debug for WrapException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WrapException").field(&self.cause).finish()
    }
}

impl Error for WrapException {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let cause: &(dyn Error + 'static) = self.cause.as_error();
        Some(cause)
    }
}
