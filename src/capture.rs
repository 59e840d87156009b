//! The boundary where caller computations are run and their failures captured.
//!
//! Capture is unconditional: an `Err` of any type and a panic both end up as a
//! [`Fault`] on the failed side. The caller's declared error type is not
//! checked here.

use std::panic::{self, AssertUnwindSafe};

use crate::trace;
use crate::types::{Fault, NullError, Outcome, Panicked};

/// Runs `f`, turning its `Err` or panic into a failed outcome.
pub(crate) fn capture<T, E, F>(f: F) -> Outcome<Fault, T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Fault>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Outcome::Solved(value),
        Ok(Err(error)) => {
            let fault = error.into();
            trace::captured(&fault);
            Outcome::Failed(fault)
        },
        Err(payload) => {
            let fault = Fault::new(Panicked::from_payload(payload));
            trace::panicked(&fault);
            Outcome::Failed(fault)
        },
    }
}

/// Like [`capture`], with `Ok(None)` becoming a [`NullValue`](crate::NullValue) error.
pub(crate) fn capture_option<T, E, F>(f: F) -> Outcome<Fault, T>
where
    F: FnOnce() -> Result<Option<T>, E>,
    E: Into<Fault>,
{
    capture(f).flat_map_success(|value| match Outcome::try_solved(value) {
        Ok(solved) => solved,
        Err(null) => Outcome::Failed(Fault::new(null)),
    })
}

/// Failed outcome carrying a library-internal invariant error.
#[inline]
pub(crate) fn invariant<T, E>(error: E) -> Outcome<Fault, T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    Outcome::Failed(Fault::new(error))
}

/// Converts an error that may be absent, substituting [`NullError`].
#[inline]
pub(crate) fn fault_or_null<E>(error: Option<E>) -> Fault
where
    E: Into<Fault>,
{
    error.map_or_else(|| Fault::new(NullError), Into::into)
}
