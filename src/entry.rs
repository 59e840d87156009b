//! Starting points of a chain.
//!
//! Key features:
//! - [`evaluate`] / [`evaluate_option`] run a fallible computation and wrap
//!   its outcome in a [`ValueHandler`].
//! - [`evaluate_effect`] does the same for computations without a value,
//!   producing an [`EffectHandler`].
//! - [`wrap`] / [`empty`] build an [`Entry`], an optional value that later
//!   steps can [`solve`](Entry::solve) against.
//!
//! A failure of any kind, including a panic, is captured as the handler's
//! error. The declared error type is kept only as a label.

use crate::capture::{capture, capture_option, invariant};
use crate::handler::{EffectHandler, ValueHandler};
use crate::types::{Fault, NoValuePresent, Outcome, UnwrapFailure};

/// Optional value at the start of a chain.
///
/// Chaining from an empty entry does not create an empty handler: the step is
/// skipped and the handler fails with [`NoValuePresent`].
///
/// # Examples
///
/// ```
/// use solve_rail::{wrap, NoValuePresent};
///
/// let present = wrap(Some("7")).solve(|s| s.parse::<i32>()).value_or(0);
/// assert_eq!(present, 7);
///
/// let absent = wrap(None::<&str>).solve(|s| s.parse::<i32>());
/// assert!(absent.error().unwrap().is::<NoValuePresent>());
/// ```
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<T> {
    value: Option<T>,
}

impl<T> Entry<T> {
    /// Creates an entry holding `value`.
    #[inline]
    pub fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty entry.
    #[inline]
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Returns `true` if the entry holds a value.
    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the entry is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrows the value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Transforms the value, if any.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Entry<U>
    where
        F: FnOnce(T) -> U,
    {
        Entry { value: self.value.map(f) }
    }

    /// Replaces the value with the entry produced by `f`.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Entry<U>
    where
        F: FnOnce(T) -> Entry<U>,
    {
        Entry { value: self.value.and_then(|value| f(value).value) }
    }

    /// Keeps the value only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self { value: self.value.filter(predicate) }
    }

    /// Runs a fallible step on the value.
    ///
    /// On an empty entry the step is not invoked and the handler fails with
    /// [`NoValuePresent`].
    #[inline]
    pub fn solve<U, E, F>(self, f: F) -> ValueHandler<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
    {
        ValueHandler::from_outcome(
            self.into_outcome().flat_map_success(|value| capture(|| f(value))),
        )
    }

    /// Runs a value-less fallible step on the value.
    ///
    /// On an empty entry the step is not invoked and the handler fails with
    /// [`NoValuePresent`].
    #[inline]
    pub fn effect<E, F>(self, f: F) -> EffectHandler<E>
    where
        F: FnOnce(T) -> Result<(), E>,
        E: Into<Fault>,
    {
        EffectHandler::from_outcome(
            self.into_outcome().flat_map_success(|value| capture(|| f(value))),
        )
    }

    /// Coerces the value to `U` at runtime, failing with a
    /// [`CastError`](crate::CastError) on a type mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::{CastError, Entry};
    ///
    /// assert_eq!(Entry::of(5_i64).cast::<i64>().value_or(0), 5);
    /// assert!(Entry::of(5_i64).cast::<u8>().error().unwrap().is::<CastError>());
    /// ```
    #[inline]
    pub fn cast<U>(self) -> ValueHandler<U>
    where
        T: 'static,
        U: 'static,
    {
        ValueHandler::<T>::from_outcome(self.into_outcome()).cast()
    }

    /// Returns the value, or `fallback` when empty.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        self.value.unwrap_or(fallback)
    }

    /// Extracts the value.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapFailure`] caused by [`NoValuePresent`] when empty.
    #[inline]
    pub fn try_value(self) -> Result<T, UnwrapFailure> {
        self.into_outcome().unwrap_solved()
    }

    /// Converts into the wrapped `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    fn into_outcome(self) -> Outcome<Fault, T> {
        match self.value {
            Some(value) => Outcome::Solved(value),
            None => invariant(NoValuePresent),
        }
    }
}

impl<T> Default for Entry<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Entry<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

/// Wraps an optional value as the start of a chain.
#[inline]
pub fn wrap<T>(value: Option<T>) -> Entry<T> {
    Entry::from(value)
}

/// Creates an empty [`Entry`].
#[inline]
pub fn empty<T>() -> Entry<T> {
    Entry::empty()
}

/// Runs a fallible computation and wraps its outcome.
///
/// `Ok(value)` becomes a solved handler, `Err(error)` a failed one. A panic
/// inside `f` is captured as a [`Panicked`](crate::Panicked) error.
///
/// # Examples
///
/// ```
/// use solve_rail::{evaluate, Fault};
///
/// let len = evaluate(|| Ok::<_, Fault>("OK")).map(str::len).value_or(0);
/// assert_eq!(len, 2);
///
/// let fallback = evaluate(|| Err::<i32, _>(Fault::msg("boom"))).value_or(-1);
/// assert_eq!(fallback, -1);
/// ```
#[inline]
pub fn evaluate<T, E, F>(f: F) -> ValueHandler<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Fault>,
{
    ValueHandler::from_outcome(capture(f))
}

/// Runs a fallible computation whose value may be absent.
///
/// `Ok(None)` becomes a [`NullValue`](crate::NullValue) error, so a solved
/// handler never holds an absent value.
///
/// # Examples
///
/// ```
/// use solve_rail::{evaluate_option, NullValue};
/// use std::collections::HashMap;
///
/// let env: HashMap<&str, &str> = HashMap::new();
/// let handler = evaluate_option(|| Ok::<_, std::io::Error>(env.get("HOME").copied()));
///
/// assert!(handler.error().unwrap().is::<NullValue>());
/// ```
#[inline]
pub fn evaluate_option<T, E, F>(f: F) -> ValueHandler<T, E>
where
    F: FnOnce() -> Result<Option<T>, E>,
    E: Into<Fault>,
{
    ValueHandler::from_outcome(capture_option(f))
}

/// Runs a fallible computation that produces no value.
#[inline]
pub fn evaluate_effect<E, F>(f: F) -> EffectHandler<E>
where
    F: FnOnce() -> Result<(), E>,
    E: Into<Fault>,
{
    EffectHandler::from_outcome(capture(f))
}
