//! Logging hooks, active with the `tracing` feature.
//!
//! Without the feature every hook is an empty inline function.

use crate::types::Fault;

/// A caller computation returned an error.
#[inline]
pub(crate) fn captured(fault: &Fault) {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %fault, "computation failed");
    #[cfg(not(feature = "tracing"))]
    let _ = fault;
}

/// A caller computation panicked.
#[inline]
pub(crate) fn panicked(fault: &Fault) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %fault, "computation panicked, captured as error");
    #[cfg(not(feature = "tracing"))]
    let _ = fault;
}

/// A held resource was released.
#[inline]
pub(crate) fn released(resource: &'static str, failure: Option<&Fault>) {
    #[cfg(feature = "tracing")]
    {
        match failure {
            None => tracing::debug!(resource, "resource released"),
            Some(error) => tracing::warn!(resource, error = %error, "resource release failed"),
        }
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (resource, failure);
}

/// A resource handler was dropped unconsumed and its close failed.
///
/// Nobody can observe this error, so the log is its only trace.
#[inline]
pub(crate) fn dropped_release_failed(resource: &'static str, fault: &Fault) {
    #[cfg(feature = "tracing")]
    tracing::warn!(resource, error = %fault, "resource released on drop failed");
    #[cfg(not(feature = "tracing"))]
    let _ = (resource, fault);
}
