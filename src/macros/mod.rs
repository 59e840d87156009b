//! Ergonomic macros for building errors inside chains.
//!
//! - [`macro@crate::fault`] - Formats a message into a [`Fault`](crate::Fault),
//!   the way `format!` builds a `String`.
//!
//! # Examples
//!
//! ```
//! use solve_rail::{evaluate, fault};
//!
//! let user_id = 42;
//! let handler = evaluate(|| Err::<(), _>(fault!("user {} not found", user_id)));
//!
//! assert_eq!(handler.error().unwrap().to_string(), "user 42 not found");
//! ```

/// Creates a message-only [`Fault`](crate::Fault) from format arguments.
///
/// # Arguments
///
/// Accepts the same arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use solve_rail::{fault, ValueHandler};
///
/// let limit = 10;
/// let handler = ValueHandler::solved(12)
///     .filter(|n| *n <= limit, |n| fault!("{n} exceeds {limit}"));
///
/// assert_eq!(handler.error().unwrap().to_string(), "12 exceeds 10");
/// ```
#[macro_export]
macro_rules! fault {
    ($($arg:tt)*) => {
        $crate::Fault::msg(::std::format!($($arg)*))
    };
}
