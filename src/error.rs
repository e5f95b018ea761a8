//! The variant-mismatch error produced by the unwrap accessors.
//!
//! Reading the success payload of an [`Err`](crate::Outcome::Err) value, or
//! the failure payload of an [`Ok`](crate::Outcome::Ok) value, is a
//! programming logic error rather than a runtime business failure. The
//! panicking accessors ([`unwrap_ok`](crate::Outcome::unwrap_ok),
//! [`unwrap_err`](crate::Outcome::unwrap_err)) treat it as fatal; the
//! fallible accessors ([`try_ok`](crate::Outcome::try_ok),
//! [`try_err`](crate::Outcome::try_err)) surface it as an [`UnwrapError`]
//! value that callers can handle specifically, distinct from any
//! application error.

use std::error::Error as StdError;
use std::fmt;

/// Error produced when an accessor is called on the wrong [`Outcome`] variant.
///
/// This is never produced or caught inside the crate itself. It exists so
/// that a variant mismatch stays distinguishable from ordinary application
/// errors at the call site.
///
/// # Examples
///
/// ```rust
/// use resultify::{Outcome, UnwrapError};
///
/// let err: Outcome<i32, &str> = Outcome::err("nope");
///
/// assert_eq!(err.try_ok(), Err(UnwrapError::ExpectedOk));
/// ```
///
/// [`Outcome`]: crate::Outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnwrapError {
    /// The success payload was requested from an `Err` value.
    ExpectedOk,
    /// The failure payload was requested from an `Ok` value.
    ExpectedErr,
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnwrapError::ExpectedOk => write!(f, "requested the `Ok` payload of an `Err` value"),
            UnwrapError::ExpectedErr => write!(f, "requested the `Err` payload of an `Ok` value"),
        }
    }
}

impl StdError for UnwrapError {}
