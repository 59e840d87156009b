use core::any::type_name;
use core::fmt::{self, Debug};
use core::marker::PhantomData;
use std::error::Error;

use crate::capture::{capture, fault_or_null, invariant};
use crate::handler::{EffectHandler, ValueHandler};
use crate::trace;
use crate::traits::Closable;
use crate::types::{Fault, NullValue, Outcome};

/// Holds a [`Closable`] resource and releases it exactly once.
///
/// The resource is released right after the step passed to
/// [`solve`](ResourceHandler::solve) or [`effect`](ResourceHandler::effect)
/// finishes, whether the step returned a value, returned an error, or
/// panicked. The step only borrows the resource, so it cannot keep it past
/// release. A handler dropped without being consumed releases its resource on
/// drop.
///
/// When the step and the release both fail, the step's error stays primary and
/// the release error is attached as
/// [`suppressed`](crate::Fault::suppressed).
///
/// # Type Parameters
///
/// * `R` - The resource type
/// * `E` - The declared error label
///
/// # Examples
///
/// ```
/// use solve_rail::{Fault, ResourceHandler, Scoped};
/// use std::cell::Cell;
///
/// let closes = Cell::new(0);
/// let resource = Scoped::new("file", |_: &str| {
///     closes.set(closes.get() + 1);
///     Ok::<(), Fault>(())
/// });
///
/// let handler = ResourceHandler::from_resource(resource)
///     .effect(|_| Err::<(), _>(Fault::msg("read failed")));
///
/// assert_eq!(closes.get(), 1);
/// assert_eq!(handler.error().unwrap().to_string(), "read failed");
/// ```
#[must_use]
pub struct ResourceHandler<R: Closable, E = Fault> {
    // Only emptied by `into_outcome` or `drop`.
    slot: Option<Outcome<Fault, R>>,
    label: PhantomData<fn() -> E>,
}

impl<R: Closable> ResourceHandler<R, Fault> {
    /// Takes ownership of `resource`.
    #[inline]
    pub fn from_resource(resource: R) -> Self {
        Self::from_outcome(Outcome::Solved(resource))
    }

    /// Takes ownership of a resource that may be absent.
    ///
    /// `None` becomes a [`NullValue`] error.
    #[inline]
    pub fn from_option(resource: Option<R>) -> Self {
        match resource {
            Some(resource) => Self::from_resource(resource),
            None => Self::from_outcome(invariant(NullValue)),
        }
    }
}

impl<R: Closable, E> ResourceHandler<R, E> {
    /// Wraps an existing outcome.
    #[inline]
    pub fn from_outcome(outcome: Outcome<Fault, R>) -> Self {
        Self { slot: Some(outcome), label: PhantomData }
    }

    /// Creates a handler that holds no resource, only `error`.
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

    /// Returns `true` if a resource is held.
    #[must_use]
    #[inline]
    pub fn is_acquired(&self) -> bool {
        self.slot.as_ref().is_some_and(Outcome::is_solved)
    }

    /// Borrows the stored error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Fault> {
        self.slot.as_ref().and_then(|outcome| outcome.as_ref().to_optional_error())
    }

    /// Runs `f` on the error without changing the handler.
    #[inline]
    pub fn do_on_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        Self::from_outcome(self.into_outcome().inspect_error(f))
    }

    /// Transforms the error, keeping suppressed errors. A held resource is kept.
    #[inline]
    pub fn map_error<X, F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> X,
        X: Into<Fault>,
    {
        Self::from_outcome(self.into_outcome().map_error(|fault| fault.map_primary(f)))
    }

    /// Transforms the error only if it is an `X`.
    #[inline]
    pub fn map_error_as<X, Y, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(X) -> Y,
        Y: Into<Fault>,
    {
        Self::from_outcome(self.into_outcome().map_error(|fault| fault.map_as(f)))
    }

    /// Runs `step` with the resource, then releases it.
    ///
    /// Without a resource, `step` never runs and the error passes through.
    #[inline]
    pub fn solve<U, E2, F>(self, step: F) -> ValueHandler<U, E2>
    where
        F: FnOnce(&mut R) -> Result<U, E2>,
        E2: Into<Fault>,
    {
        ValueHandler::from_outcome(
            self.into_outcome().flat_map_success(|resource| scoped(resource, step)),
        )
    }

    /// Runs a value-less `step` with the resource, then releases it.
    #[inline]
    pub fn effect<E2, F>(self, step: F) -> EffectHandler<E2>
    where
        F: FnOnce(&mut R) -> Result<(), E2>,
        E2: Into<Fault>,
    {
        EffectHandler::from_outcome(
            self.into_outcome().flat_map_success(|resource| scoped(resource, step)),
        )
    }

    /// Releases the resource without running a step.
    #[inline]
    pub fn close(self) -> EffectHandler<E> {
        EffectHandler::from_outcome(
            self.into_outcome()
                .flat_map_success(|resource| scoped(resource, |_| Ok::<(), Fault>(()))),
        )
    }

    fn into_outcome(mut self) -> Outcome<Fault, R> {
        match self.slot.take() {
            Some(outcome) => outcome,
            None => invariant(NullValue),
        }
    }
}

impl<R: Closable, E> Drop for ResourceHandler<R, E> {
    fn drop(&mut self) {
        if let Some(Outcome::Solved(resource)) = self.slot.take() {
            // A panicking close must not escape drop.
            if let Some(fault) = capture(move || resource.close()).to_optional_error() {
                trace::dropped_release_failed(type_name::<R>(), &fault);
            }
        }
    }
}

impl<R: Closable + Debug, E> Debug for ResourceHandler<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceHandler").field(&self.slot).finish()
    }
}

/// Runs `step` on `resource`, then closes it exactly once.
///
/// A step failure stays primary; a close failure is either the error or a
/// suppressed companion of the step's error.
fn scoped<R, U, E, F>(mut resource: R, step: F) -> Outcome<Fault, U>
where
    R: Closable,
    F: FnOnce(&mut R) -> Result<U, E>,
    E: Into<Fault>,
{
    let outcome = capture(|| step(&mut resource));
    let released = capture(move || resource.close()).to_optional_error();
    trace::released(type_name::<R>(), released.as_ref());

    match (outcome, released) {
        (outcome, None) => outcome,
        (Outcome::Failed(primary), Some(close)) => Outcome::Failed(primary.with_suppressed(close)),
        (Outcome::Solved(_), Some(close)) => Outcome::Failed(close),
    }
}
