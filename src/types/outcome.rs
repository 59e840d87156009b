use crate::types::{Fault, NullError, NullValue, UnwrapFailure};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary sum type holding exactly one of an error or a success value.
///
/// `Outcome<E, V>` is the foundation every handler in this crate is built on.
/// The only primitive is [`fold`](Outcome::fold); every other combinator is
/// written in terms of it so that no operation can observe or produce a third
/// state.
///
/// # Serde Support
///
/// With the `serde` feature enabled, `Outcome` implements `Serialize` and
/// `Deserialize` when `E` and `V` do.
///
/// # Type Parameters
///
/// * `E` - The error type
/// * `V` - The success value type
///
/// # Examples
///
/// ```
/// use solve_rail::Outcome;
///
/// let solved: Outcome<&str, i32> = Outcome::Solved(2);
/// let failed: Outcome<&str, i32> = Outcome::Failed("boom");
///
/// assert_eq!(solved.fold(|_| 0, |v| v * 10), 20);
/// assert_eq!(failed.fold(|e| e.len() as i32, |v| v), 4);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<E, V> {
    Failed(E),
    Solved(V),
}

impl<E, V> Outcome<E, V> {
    /// Builds a solved outcome from a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NullValue`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::{NullValue, Outcome};
    ///
    /// assert_eq!(Outcome::<(), _>::try_solved(Some(1)), Ok(Outcome::Solved(1)));
    /// assert_eq!(Outcome::<(), i32>::try_solved(None), Err(NullValue));
    /// ```
    #[inline]
    pub fn try_solved(value: Option<V>) -> Result<Self, NullValue> {
        value.map(Self::Solved).ok_or(NullValue)
    }

    /// Builds a failed outcome from an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`NullError`] when `error` is `None`.
    #[inline]
    pub fn try_failed(error: Option<E>) -> Result<Self, NullError> {
        error.map(Self::Failed).ok_or(NullError)
    }

    /// Applies exactly one of the two callbacks and returns its output.
    ///
    /// This is the sole extraction primitive of the type.
    ///
    /// # Arguments
    ///
    /// * `on_error` - Called with the error when the outcome is `Failed`
    /// * `on_success` - Called with the value when the outcome is `Solved`
    #[inline]
    pub fn fold<R, OnError, OnSuccess>(self, on_error: OnError, on_success: OnSuccess) -> R
    where
        OnError: FnOnce(E) -> R,
        OnSuccess: FnOnce(V) -> R,
    {
        match self {
            Self::Failed(error) => on_error(error),
            Self::Solved(value) => on_success(value),
        }
    }

    /// Borrows both sides, producing an `Outcome<&E, &V>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&E, &V> {
        match self {
            Self::Failed(error) => Outcome::Failed(error),
            Self::Solved(value) => Outcome::Solved(value),
        }
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.as_ref().fold(|_| true, |_| false)
    }

    /// Returns `true` if the outcome holds a success value.
    #[must_use]
    #[inline]
    pub fn is_solved(&self) -> bool {
        !self.is_failed()
    }

    /// Transforms the error side, leaving a success value untouched.
    #[inline]
    pub fn map_error<E2, F>(self, f: F) -> Outcome<E2, V>
    where
        F: FnOnce(E) -> E2,
    {
        self.fold(|error| Outcome::Failed(f(error)), Outcome::Solved)
    }

    /// Transforms the success side, leaving an error untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::Outcome;
    ///
    /// let failed: Outcome<&str, i32> = Outcome::Failed("nope");
    /// assert_eq!(failed.map_success(|v| v + 1), Outcome::Failed("nope"));
    /// ```
    #[inline]
    pub fn map_success<V2, F>(self, f: F) -> Outcome<E, V2>
    where
        F: FnOnce(V) -> V2,
    {
        self.fold(Outcome::Failed, |value| Outcome::Solved(f(value)))
    }

    /// Transforms whichever side is populated.
    #[inline]
    pub fn map_both<E2, V2, FE, FV>(self, on_error: FE, on_success: FV) -> Outcome<E2, V2>
    where
        FE: FnOnce(E) -> E2,
        FV: FnOnce(V) -> V2,
    {
        self.fold(
            |error| Outcome::Failed(on_error(error)),
            |value| Outcome::Solved(on_success(value)),
        )
    }

    /// Replaces an error with the outcome produced by `f`.
    #[inline]
    pub fn flat_map_error<E2, F>(self, f: F) -> Outcome<E2, V>
    where
        F: FnOnce(E) -> Outcome<E2, V>,
    {
        self.fold(f, Outcome::Solved)
    }

    /// Replaces a success value with the outcome produced by `f`.
    #[inline]
    pub fn flat_map_success<V2, F>(self, f: F) -> Outcome<E, V2>
    where
        F: FnOnce(V) -> Outcome<E, V2>,
    {
        self.fold(Outcome::Failed, f)
    }

    /// Runs `f` on the error, if any, and returns the outcome unchanged.
    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        self.fold(
            |error| {
                f(&error);
                Self::Failed(error)
            },
            Self::Solved,
        )
    }

    /// Runs `f` on the success value, if any, and returns the outcome unchanged.
    #[inline]
    pub fn inspect_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&V),
    {
        self.fold(Self::Failed, |value| {
            f(&value);
            Self::Solved(value)
        })
    }

    /// Returns the error, or `default` when the outcome is solved.
    #[inline]
    pub fn error_or(self, default: E) -> E {
        self.fold(|error| error, |_| default)
    }

    /// Returns the success value, or `default` when the outcome failed.
    #[inline]
    pub fn success_or(self, default: V) -> V {
        self.fold(|_| default, |value| value)
    }

    /// Converts the error side into an `Option`, discarding a success value.
    #[inline]
    pub fn to_optional_error(self) -> Option<E> {
        self.fold(Some, |_| None)
    }

    /// Converts the success side into an `Option`, discarding an error.
    #[inline]
    pub fn to_optional_success(self) -> Option<V> {
        self.fold(|_| None, Some)
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        self.fold(Err, Ok)
    }

    /// Extracts the success value.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapFailure`] carrying the stored error as its cause when
    /// the outcome failed.
    #[inline]
    pub fn unwrap_solved(self) -> Result<V, UnwrapFailure>
    where
        E: Into<Fault>,
    {
        self.fold(|error| Err(UnwrapFailure::missing_value(error.into())), Ok)
    }

    /// Extracts the error.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapFailure`] when the outcome is solved.
    #[inline]
    pub fn unwrap_failed(self) -> Result<E, UnwrapFailure> {
        self.fold(Ok, |_| Err(UnwrapFailure::missing_error()))
    }
}

impl<E, V> From<Result<V, E>> for Outcome<E, V> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Solved(value),
            Err(error) => Self::Failed(error),
        }
    }
}

impl<E, V> From<Outcome<E, V>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<E, V>) -> Self {
        outcome.into_result()
    }
}
