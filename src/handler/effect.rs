use core::fmt::{self, Debug};
use core::marker::PhantomData;
use std::error::Error;

use crate::capture::{capture, fault_or_null};
use crate::handler::value::retag;
use crate::handler::ValueHandler;
use crate::types::{Fault, Outcome, UnwrapFailure, WrapException};

/// Chainable wrapper around a fallible computation that produces no value.
///
/// The value-less counterpart of [`ValueHandler`]: it records only whether an
/// error occurred, and offers the same observation, recovery and error
/// mapping vocabulary. "No error" plays the part of "solved".
///
/// # Examples
///
/// ```
/// use solve_rail::{evaluate_effect, Fault};
///
/// let mut cleaned = false;
/// let handler = evaluate_effect(|| Err::<(), _>(Fault::msg("locked")))
///     .catch_error(|_| cleaned = true);
///
/// assert!(handler.is_success());
/// assert!(cleaned);
/// ```
#[must_use]
pub struct EffectHandler<E = Fault> {
    outcome: Outcome<Fault, ()>,
    label: PhantomData<fn() -> E>,
}

impl EffectHandler<Fault> {
    /// Creates a handler without an error.
    #[inline]
    pub fn success() -> Self {
        Self::from_outcome(Outcome::Solved(()))
    }
}

impl<E> EffectHandler<E> {
    /// Wraps an existing outcome.
    #[inline]
    pub fn from_outcome(outcome: Outcome<Fault, ()>) -> Self {
        Self { outcome, label: PhantomData }
    }

    /// Wraps a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<(), E>) -> Self
    where
        E: Into<Fault>,
    {
        Self::from_outcome(Outcome::from(result).map_error(Into::into))
    }

    /// Creates a failed handler.
    #[inline]
    pub fn failure(error: E) -> Self
    where
        E: Into<Fault>,
    {
        Self::from_outcome(Outcome::Failed(error.into()))
    }

    /// Creates a failed handler from an error that may be absent.
    ///
    /// `None` becomes a [`NullError`](crate::NullError).
    #[inline]
    pub fn failure_option(error: Option<E>) -> Self
    where
        E: Into<Fault>,
    {
        Self::from_outcome(Outcome::Failed(fault_or_null(error)))
    }

    /// Returns `true` if no error occurred.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Returns `true` if an error occurred.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.outcome.is_failed()
    }

    /// Borrows the stored error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Fault> {
        self.outcome.as_ref().to_optional_error()
    }

    /// Runs `f` if no error occurred.
    #[inline]
    pub fn do_on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        Self::from_outcome(self.outcome.inspect_success(|()| f()))
    }

    /// Runs `f` on the error without changing the handler.
    #[inline]
    pub fn do_on_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        Self::from_outcome(self.outcome.inspect_error(f))
    }

    /// Runs `f` only if the stored error is an `X`.
    #[inline]
    pub fn do_on_error_as<X, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(&X),
    {
        self.do_on_error(|fault| {
            if let Some(error) = fault.downcast_ref::<X>() {
                f(error);
            }
        })
    }

    /// Handles any error, leaving the handler successful.
    #[inline]
    pub fn catch_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault),
    {
        self.outcome.fold(f, |()| ());
        Self::from_outcome(Outcome::Solved(()))
    }

    /// Handles the error only if it is an `X`; any other error passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::evaluate_effect;
    /// use std::io;
    ///
    /// let handler = evaluate_effect(|| Err::<(), _>(io::Error::other("busy")))
    ///     .catch_error_as(|_: std::num::ParseIntError| ());
    /// assert!(handler.is_failed());
    ///
    /// let handler = handler.catch_error_as(|_: io::Error| ());
    /// assert!(handler.is_success());
    /// ```
    #[inline]
    pub fn catch_error_as<X, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(X),
    {
        Self::from_outcome(self.outcome.flat_map_error(|fault| match fault.downcast::<X>() {
            Ok(error) => Outcome::Solved(f(error)),
            Err(fault) => Outcome::Failed(fault),
        }))
    }

    /// Transforms the error without handling it. Suppressed errors are kept.
    #[inline]
    pub fn map_error<R, F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> R,
        R: Into<Fault>,
    {
        Self::from_outcome(self.outcome.map_error(|fault| fault.map_primary(f)))
    }

    /// Transforms the error only if it is an `X`. Suppressed errors are kept.
    #[inline]
    pub fn map_error_as<X, R, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(X) -> R,
        R: Into<Fault>,
    {
        Self::from_outcome(self.outcome.map_error(|fault| fault.map_as(f)))
    }

    /// Continues with a fallible step that produces a value.
    ///
    /// The step runs only if no error occurred; an existing error passes
    /// through under the new label.
    #[inline]
    pub fn solve<U, E2, F>(self, f: F) -> ValueHandler<U, E2>
    where
        F: FnOnce() -> Result<U, E2>,
        E2: Into<Fault>,
    {
        ValueHandler::from_outcome(self.outcome.flat_map_success(|()| capture(f)))
    }

    /// Continues with exactly one of two fallible steps producing a value.
    #[inline]
    pub fn solve_either<U, E2, S, R>(self, on_success: S, on_error: R) -> ValueHandler<U, E2>
    where
        S: FnOnce() -> Result<U, E2>,
        R: FnOnce(Fault) -> Result<U, E2>,
        E2: Into<Fault>,
    {
        ValueHandler::from_outcome(
            self.outcome.fold(|fault| capture(|| on_error(fault)), |()| capture(on_success)),
        )
    }

    /// Continues with another value-less fallible step.
    #[inline]
    pub fn effect<E2, F>(self, f: F) -> EffectHandler<E2>
    where
        F: FnOnce() -> Result<(), E2>,
        E2: Into<Fault>,
    {
        EffectHandler::from_outcome(self.outcome.flat_map_success(|()| capture(f)))
    }

    /// Continues with exactly one of two value-less fallible steps.
    #[inline]
    pub fn effect_either<E2, S, R>(self, on_success: S, on_error: R) -> EffectHandler<E2>
    where
        S: FnOnce() -> Result<(), E2>,
        R: FnOnce(Fault) -> Result<(), E2>,
        E2: Into<Fault>,
    {
        EffectHandler::from_outcome(
            self.outcome.fold(|fault| capture(|| on_error(fault)), |()| capture(on_success)),
        )
    }

    /// Returns `Ok(())`, or the stored error as-is.
    ///
    /// # Errors
    ///
    /// Returns the stored [`Fault`] when an error occurred.
    #[inline]
    pub fn raise(self) -> Result<(), Fault> {
        self.outcome.into_result()
    }

    /// Returns `Ok(())`, or the error mapped by `f`.
    ///
    /// # Errors
    ///
    /// Returns `f(fault)` when an error occurred.
    #[inline]
    pub fn raise_with<X, F>(self, f: F) -> Result<(), X>
    where
        F: FnOnce(Fault) -> X,
    {
        self.outcome.map_error(f).into_result()
    }

    /// Returns `Ok(())`, or the error typed as the declared label `E`.
    ///
    /// Errors of another type, and errors carrying suppressed errors, are
    /// re-tagged through [`WrapException`].
    ///
    /// # Errors
    ///
    /// Returns the stored error, as an `E`, when an error occurred.
    #[inline]
    pub fn raise_as(self) -> Result<(), E>
    where
        E: Error + From<WrapException> + 'static,
    {
        self.raise_with(retag)
    }

    /// Asserts that no error occurred.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapFailure`] whose cause is the stored error.
    #[inline]
    pub fn try_complete(self) -> Result<(), UnwrapFailure> {
        self.outcome.unwrap_solved()
    }

    /// Returns the stored error, if any.
    #[inline]
    pub fn into_error(self) -> Option<Fault> {
        self.outcome.to_optional_error()
    }

    /// Hands back the underlying outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<Fault, ()> {
        self.outcome
    }
}

impl<E> From<Result<(), E>> for EffectHandler<E>
where
    E: Into<Fault>,
{
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        Self::from_result(result)
    }
}

impl<E> Debug for EffectHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EffectHandler").field(&self.outcome).finish()
    }
}
