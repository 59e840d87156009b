//! Erased error payload stored on the failed side of every handler.
//!
//! A [`Fault`] owns the primary error as a boxed trait object plus any number
//! of suppressed secondary faults. The static error type a handler advertises
//! is only a label; the actual runtime type is recovered here through
//! downcasting.

use core::fmt::{self, Debug, Display};
use std::borrow::Cow;
use std::error::Error;

use crate::types::ErrorVec;

/// Boxed error trait object accepted and produced by [`Fault`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Type-erased error with optional suppressed secondary faults.
///
/// Any `std::error::Error + Send + Sync + 'static` converts into a `Fault`,
/// which is why `Fault` itself does not implement `Error`. Use
/// [`as_error`](Fault::as_error) or `Box::<dyn Error + Send + Sync>::from` to
/// hand it to code expecting a standard error.
///
/// The fault is a single pointer wide; the error and the suppressed list live
/// behind one allocation.
///
/// # Examples
///
/// ```
/// use solve_rail::Fault;
/// use std::io;
///
/// let fault = Fault::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
///
/// assert!(fault.is::<io::Error>());
/// assert_eq!(fault.to_string(), "missing");
/// assert_eq!(fault.downcast::<io::Error>().unwrap().kind(), io::ErrorKind::NotFound);
/// ```
pub struct Fault(Box<FaultInner>);

struct FaultInner {
    error: BoxError,
    suppressed: ErrorVec<Fault>,
}

impl Fault {
    /// Wraps an error without suppressed faults.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Wraps an already boxed error.
    #[inline]
    pub fn from_boxed(error: BoxError) -> Self {
        Self(Box::new(FaultInner { error, suppressed: ErrorVec::new() }))
    }

    /// Creates a fault carrying only a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use solve_rail::Fault;
    ///
    /// let fault = Fault::msg("config missing");
    /// assert_eq!(fault.to_string(), "config missing");
    /// ```
    #[inline]
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::new(Message(message.into()))
    }

    /// Attaches a secondary fault without changing the primary error.
    #[inline]
    pub fn with_suppressed<F>(mut self, fault: F) -> Self
    where
        F: Into<Fault>,
    {
        self.0.suppressed.push(fault.into());
        self
    }

    /// Attaches several secondary faults at once.
    #[inline]
    pub fn with_suppressed_all<I>(mut self, faults: I) -> Self
    where
        I: IntoIterator<Item = Fault>,
    {
        self.0.suppressed.extend(faults);
        self
    }

    /// Returns the suppressed faults in the order they were attached.
    #[inline]
    pub fn suppressed(&self) -> &[Fault] {
        &self.0.suppressed
    }

    /// Returns the primary error as a standard error trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.0.error
    }

    /// Returns `true` if the primary error is of type `X`.
    #[must_use]
    #[inline]
    pub fn is<X>(&self) -> bool
    where
        X: Error + 'static,
    {
        self.0.error.is::<X>()
    }

    /// Borrows the primary error as `X`, if that is its runtime type.
    #[inline]
    pub fn downcast_ref<X>(&self) -> Option<&X>
    where
        X: Error + 'static,
    {
        self.0.error.downcast_ref::<X>()
    }

    /// Mutably borrows the primary error as `X`, if that is its runtime type.
    #[inline]
    pub fn downcast_mut<X>(&mut self) -> Option<&mut X>
    where
        X: Error + 'static,
    {
        self.0.error.downcast_mut::<X>()
    }

    /// Takes the primary error out as `X`, discarding suppressed faults.
    ///
    /// # Errors
    ///
    /// Returns the fault unchanged when the primary error is not an `X`.
    #[inline]
    pub fn downcast<X>(self) -> Result<X, Fault>
    where
        X: Error + 'static,
    {
        self.downcast_parts().map(|(error, _)| error)
    }

    /// Like [`downcast`](Fault::downcast), but also hands back the suppressed faults.
    pub(crate) fn downcast_parts<X>(self) -> Result<(X, ErrorVec<Fault>), Fault>
    where
        X: Error + 'static,
    {
        let FaultInner { error, suppressed } = *self.0;
        match error.downcast::<X>() {
            Ok(error) => Ok((*error, suppressed)),
            Err(error) => Err(Self(Box::new(FaultInner { error, suppressed }))),
        }
    }

    /// Replaces the primary error with `f(x)` when it is an `X`.
    ///
    /// Suppressed faults are carried over to the replacement. A fault of any
    /// other type is returned unchanged.
    pub(crate) fn map_as<X, F, R>(self, f: F) -> Fault
    where
        X: Error + 'static,
        F: FnOnce(X) -> R,
        R: Into<Fault>,
    {
        match self.downcast_parts::<X>() {
            Ok((error, suppressed)) => f(error).into().with_suppressed_all(suppressed),
            Err(fault) => fault,
        }
    }

    /// Replaces the primary error with `f(self)`, keeping suppressed faults.
    ///
    /// `f` sees the fault without its suppressed list; the list is moved over
    /// to the replacement afterwards.
    pub(crate) fn map_primary<F, R>(mut self, f: F) -> Fault
    where
        F: FnOnce(Fault) -> R,
        R: Into<Fault>,
    {
        let suppressed = core::mem::take(&mut self.0.suppressed);
        f(self).into().with_suppressed_all(suppressed)
    }

    /// Iterates the primary error followed by its `source()` chain.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        let primary: &(dyn Error + 'static) = self.as_error();
        Chain { next: Some(primary) }
    }

    /// Returns the innermost error of the `source()` chain.
    pub fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut current: &(dyn Error + 'static) = self.as_error();
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }

    /// Consumes the fault, returning the boxed primary error.
    #[inline]
    pub fn into_boxed(self) -> BoxError {
        self.0.error
    }
}

impl<E> From<E> for Fault
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl From<Fault> for BoxError {
    #[inline]
    fn from(fault: Fault) -> Self {
        fault.into_boxed()
    }
}

impl Display for Fault {
    /// Shows the primary error. The alternate form (`{:#}`) also lists the
    /// source chain and any suppressed faults.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0.error, f)?;
        if f.alternate() {
            for source in self.chain().skip(1) {
                write!(f, ": {source}")?;
            }
            for suppressed in self.suppressed() {
                write!(f, " (suppressed: {suppressed:#})")?;
            }
        }
        Ok(())
    }
}

impl Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.suppressed.is_empty() {
            return Debug::fmt(&self.0.error, f);
        }
        f.debug_struct("Fault")
            .field("error", &self.0.error)
            .field("suppressed", &self.0.suppressed.as_slice())
            .finish()
    }
}

/// Iterator over a fault's primary error and its `source()` chain.
///
/// Created by [`Fault::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}

/// Plain message error behind [`Fault::msg`] and the `fault!` macro.
struct Message(Cow<'static, str>);

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Error for Message {}
