use core::any::Any;
use core::fmt::{self, Debug};
use core::marker::PhantomData;
use std::error::Error;

use crate::capture::{capture, fault_or_null};
use crate::handler::{EffectHandler, ResourceHandler};
use crate::traits::Closable;
use crate::types::{CastError, Fault, Outcome, UnwrapFailure, WrapException};

/// Chainable wrapper around the outcome of a fallible computation.
///
/// `ValueHandler` holds either a success value of type `T` or a [`Fault`]. It
/// lets you:
/// - Transform the value with `map`, `flat_map`, `filter` and `cast`
/// - Continue with further fallible steps via `solve` and `effect`
/// - Observe, recover from, or remap errors, optionally narrowed to one
///   runtime error type with the `*_as` variants
/// - Finish with a terminal operator such as `value_or` or `value_or_raise`
///
/// `E` is the error type the last computation declared. It is a compile-time
/// label only: the stored error is erased, and may be any type. Combinators
/// that need to tell error types apart take an explicit type parameter and
/// test the actual stored error.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The declared error label
///
/// # Examples
///
/// ```
/// use solve_rail::evaluate;
///
/// let len = evaluate(|| "42".parse::<u32>())
///     .map(|n| n.to_string())
///     .map(|s| s.len())
///     .value_or(0);
///
/// assert_eq!(len, 2);
/// ```
#[must_use]
pub struct ValueHandler<T, E = Fault> {
    outcome: Outcome<Fault, T>,
    label: PhantomData<fn() -> E>,
}

impl<T> ValueHandler<T, Fault> {
    /// Creates a solved handler.
    #[inline]
    pub fn solved(value: T) -> Self {
        Self::from_outcome(Outcome::Solved(value))
    }
}

impl<T, E> ValueHandler<T, E> {
    /// Wraps an existing outcome.
    #[inline]
    pub fn from_outcome(outcome: Outcome<Fault, T>) -> Self {
        Self { outcome, label: PhantomData }
    }

    /// Wraps a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self
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

    /// Returns `true` if the handler holds a value.
    #[must_use]
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Returns `true` if the handler holds an error.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.outcome.is_failed()
    }

    /// Borrows the stored value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().to_optional_success()
    }

    /// Borrows the stored error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Fault> {
        self.outcome.as_ref().to_optional_error()
    }

    /// Transforms the success value. An error passes through unchanged.
    ///
    /// `f` is not guarded; use [`solve`](ValueHandler::solve) for steps that can fail.
    #[inline]
    pub fn map<U, F>(self, f: F) -> ValueHandler<U, E>
    where
        F: FnOnce(T) -> U,
    {
        ValueHandler::from_outcome(self.outcome.map_success(f))
    }

    /// Replaces the success value with the handler produced by `f`.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> ValueHandler<U, E>
    where
        F: FnOnce(T) -> ValueHandler<U, E>,
    {
        ValueHandler::from_outcome(self.outcome.flat_map_success(|value| f(value).outcome))
    }

    /// Runs `f` on the success value without changing the handler.
    #[inline]
    pub fn do_on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        Self::from_outcome(self.outcome.inspect_success(f))
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
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::evaluate;
    /// use std::io;
    ///
    /// let mut seen = Vec::new();
    /// let _ = evaluate(|| Err::<(), _>(io::Error::other("disk")))
    ///     .do_on_error_as(|e: &std::fmt::Error| seen.push(format!("fmt: {e}")))
    ///     .do_on_error_as(|e: &io::Error| seen.push(format!("io: {e}")));
    ///
    /// assert_eq!(seen, ["io: disk"]);
    /// ```
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

    /// Recovers from any error by turning it into a value.
    #[inline]
    pub fn catch_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        Self::from_outcome(Outcome::Solved(self.outcome.fold(f, |value| value)))
    }

    /// Recovers only if the stored error is an `X`; any other error passes through.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::evaluate;
    /// use std::io;
    ///
    /// let value = evaluate(|| Err::<&str, _>(io::Error::other("FAIL")))
    ///     .catch_error_as(|_: io::Error| "recovered")
    ///     .value_or("x");
    ///
    /// assert_eq!(value, "recovered");
    /// ```
    #[inline]
    pub fn catch_error_as<X, F>(self, f: F) -> Self
    where
        X: Error + 'static,
        F: FnOnce(X) -> T,
    {
        Self::from_outcome(self.outcome.flat_map_error(|fault| match fault.downcast::<X>() {
            Ok(error) => Outcome::Solved(f(error)),
            Err(fault) => Outcome::Failed(fault),
        }))
    }

    /// Transforms the error without recovering. Suppressed errors are kept.
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

    /// Continues with a fallible step on the success value.
    ///
    /// The step runs only if the handler is solved. An existing error passes
    /// through under the new error label.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::evaluate;
    ///
    /// let port = evaluate(|| Ok::<_, std::io::Error>("8080"))
    ///     .solve(|raw| raw.parse::<u16>())
    ///     .value_or(80);
    ///
    /// assert_eq!(port, 8080);
    /// ```
    #[inline]
    pub fn solve<U, E2, F>(self, f: F) -> ValueHandler<U, E2>
    where
        F: FnOnce(T) -> Result<U, E2>,
        E2: Into<Fault>,
    {
        ValueHandler::from_outcome(self.outcome.flat_map_success(|value| capture(|| f(value))))
    }

    /// Continues with exactly one of two fallible steps.
    ///
    /// `on_success` receives the value when solved, `on_error` receives the
    /// error when failed. Whatever the chosen step produces, including a new
    /// error, becomes the new handler.
    #[inline]
    pub fn solve_either<U, E2, S, R>(self, on_success: S, on_error: R) -> ValueHandler<U, E2>
    where
        S: FnOnce(T) -> Result<U, E2>,
        R: FnOnce(Fault) -> Result<U, E2>,
        E2: Into<Fault>,
    {
        ValueHandler::from_outcome(
            self.outcome
                .fold(|fault| capture(|| on_error(fault)), |value| capture(|| on_success(value))),
        )
    }

    /// Continues with a fallible step that produces no value.
    #[inline]
    pub fn effect<E2, F>(self, f: F) -> EffectHandler<E2>
    where
        F: FnOnce(T) -> Result<(), E2>,
        E2: Into<Fault>,
    {
        EffectHandler::from_outcome(self.outcome.flat_map_success(|value| capture(|| f(value))))
    }

    /// Continues with exactly one of two value-less fallible steps.
    #[inline]
    pub fn effect_either<E2, S, R>(self, on_success: S, on_error: R) -> EffectHandler<E2>
    where
        S: FnOnce(T) -> Result<(), E2>,
        R: FnOnce(Fault) -> Result<(), E2>,
        E2: Into<Fault>,
    {
        EffectHandler::from_outcome(
            self.outcome
                .fold(|fault| capture(|| on_error(fault)), |value| capture(|| on_success(value))),
        )
    }

    /// Coerces the success value to `U` at runtime.
    ///
    /// Succeeds only when `T` and `U` are the same type; otherwise the handler
    /// fails with a [`CastError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::{CastError, ValueHandler};
    ///
    /// let same = ValueHandler::solved(7_u8).cast::<u8>();
    /// assert_eq!(same.value_or(0), 7);
    ///
    /// let other = ValueHandler::solved(7_u8).cast::<String>();
    /// assert!(other.error().unwrap().is::<CastError>());
    /// ```
    #[inline]
    pub fn cast<U>(self) -> ValueHandler<U, E>
    where
        T: 'static,
        U: 'static,
    {
        self.cast_or_else(|_, error| error)
    }

    /// Coerces the success value to `U`, remapping a failed coercion.
    ///
    /// `f` receives the original value and the [`CastError`].
    #[inline]
    pub fn cast_or_else<U, R, F>(self, f: F) -> ValueHandler<U, E>
    where
        T: 'static,
        U: 'static,
        F: FnOnce(T, CastError) -> R,
        R: Into<Fault>,
    {
        ValueHandler::from_outcome(self.outcome.flat_map_success(|value| {
            let mut slot = Some(value);
            match coerce::<T, U>(&mut slot) {
                Some(cast) => Outcome::Solved(cast),
                None => {
                    let error = CastError::new::<T, U>();
                    Outcome::Failed(
                        slot.map_or_else(|| Fault::new(error), |value| f(value, error).into()),
                    )
                },
            }
        }))
    }

    /// Keeps the value if `predicate` holds; otherwise fails with `on_false(value)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::{Fault, ValueHandler};
    ///
    /// let rejected = ValueHandler::solved(-3)
    ///     .filter(|n| *n >= 0, |n| Fault::msg(format!("negative: {n}")));
    ///
    /// assert_eq!(rejected.error().unwrap().to_string(), "negative: -3");
    /// ```
    #[inline]
    pub fn filter<P, R, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> R,
        R: Into<Fault>,
    {
        Self::from_outcome(self.outcome.flat_map_success(|value| {
            if predicate(&value) {
                Outcome::Solved(value)
            } else {
                Outcome::Failed(on_false(value).into())
            }
        }))
    }

    /// Returns the value, or `fallback` on error.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        self.outcome.success_or(fallback)
    }

    /// Returns the value, or maps the error into one.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        self.outcome.fold(f, |value| value)
    }

    /// Returns the value, or computes one. `f` only runs on error.
    #[inline]
    pub fn value_or_compute<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.outcome.fold(|_| f(), |value| value)
    }

    /// Returns the value, or `None` on error.
    #[inline]
    pub fn value_or_none(self) -> Option<T> {
        self.outcome.to_optional_success()
    }

    /// Converts into an `Option`, discarding the error.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value_or_none()
    }

    /// Returns the value, or the stored error as-is.
    ///
    /// # Errors
    ///
    /// Returns the stored [`Fault`] when the handler failed.
    #[inline]
    pub fn value_or_raise(self) -> Result<T, Fault> {
        self.outcome.into_result()
    }

    /// Returns the value, or the error mapped by `f`.
    ///
    /// # Errors
    ///
    /// Returns `f(fault)` when the handler failed.
    #[inline]
    pub fn value_or_raise_with<X, F>(self, f: F) -> Result<T, X>
    where
        F: FnOnce(Fault) -> X,
    {
        self.outcome.map_error(f).into_result()
    }

    /// Returns the value, or the error typed as the declared label `E`.
    ///
    /// A stored error that really is an `E` is returned as-is. Any other error,
    /// or one carrying suppressed errors, is wrapped in a [`WrapException`] and
    /// converted with `E::from`.
    ///
    /// # Errors
    ///
    /// Returns the stored error, as an `E`, when the handler failed.
    #[inline]
    pub fn value_or_raise_as(self) -> Result<T, E>
    where
        E: Error + From<WrapException> + 'static,
    {
        self.value_or_raise_with(retag)
    }

    /// Extracts the value.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapFailure`] whose cause is the stored error.
    #[inline]
    pub fn try_value(self) -> Result<T, UnwrapFailure> {
        self.outcome.unwrap_solved()
    }

    /// Hands back the underlying outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<Fault, T> {
        self.outcome
    }

    /// Turns the success value into a closable resource.
    ///
    /// An existing error is carried over and `f` is not invoked.
    #[inline]
    pub fn map_to_resource<R, F>(self, f: F) -> ResourceHandler<R, E>
    where
        R: Closable,
        F: FnOnce(T) -> R,
    {
        ResourceHandler::from_outcome(self.outcome.map_success(f))
    }

    /// Acquires a closable resource through a fallible step.
    ///
    /// An existing error is carried over and `f` is not invoked.
    #[inline]
    pub fn solve_to_resource<R, E2, F>(self, f: F) -> ResourceHandler<R, E2>
    where
        R: Closable,
        F: FnOnce(T) -> Result<R, E2>,
        E2: Into<Fault>,
    {
        ResourceHandler::from_outcome(self.solve(f).outcome)
    }
}

impl<T, E> From<Result<T, E>> for ValueHandler<T, E>
where
    E: Into<Fault>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T: Debug, E> Debug for ValueHandler<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueHandler").field(&self.outcome).finish()
    }
}

/// Takes the value out of `slot` as a `U` when `T` and `U` are the same type.
///
/// On a mismatch `slot` is left as it was.
fn coerce<T: 'static, U: 'static>(slot: &mut Option<T>) -> Option<U> {
    let any: &mut dyn Any = slot;
    any.downcast_mut::<Option<U>>().and_then(Option::take)
}

/// Returns `fault` typed as `E`, wrapping it when it is not one.
///
/// A fault with suppressed companions is always wrapped, so none of them are lost.
pub(crate) fn retag<E>(fault: Fault) -> E
where
    E: Error + From<WrapException> + 'static,
{
    if !fault.suppressed().is_empty() {
        return E::from(WrapException::new(fault));
    }
    match fault.downcast::<E>() {
        Ok(error) => error,
        Err(fault) => E::from(WrapException::new(fault)),
    }
}
