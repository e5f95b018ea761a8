//! Convert a raw fallible operation into an [`Outcome`]-returning one.
//!
//! A raw operation signals failure on its `Result` error channel. The
//! [`resultify`] adapter intercepts the errors its [`Selector`] designates,
//! capturing them as `Outcome::Err` payloads, and lets every other error
//! keep propagating on the raw channel — identity preserved, composing with
//! `?` at the call site. Conversion happens at exactly this one layer:
//! the adapter never retries and never logs.
//!
//! # Example
//!
//! ```rust
//! use resultify::prelude::{resultify, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum TestError {
//!     Transient,
//!     Permanent,
//! }
//!
//! let mut operation = resultify(
//!     |e: &TestError| matches!(e, TestError::Transient),
//!     |fail: bool| {
//!         if fail {
//!             Err(TestError::Transient)
//!         } else {
//!             Ok("done")
//!         }
//!     },
//! );
//!
//! // Intercepted: the error instance becomes the Err payload.
//! assert_eq!(operation(true), Ok(Outcome::err(TestError::Transient)));
//! // Normal return: wrapped as Ok.
//! assert_eq!(operation(false), Ok(Outcome::ok("done")));
//! ```

use crate::outcome::Outcome;
use crate::selector::Selector;

/// Wrap a fallible operation so that designated errors become
/// [`Outcome::Err`] values instead of propagating.
///
/// The wrapper has the same call shape as the wrapped operation and adds
/// no behavior beyond the conversion: each invocation re-executes the
/// operation, interception is decided per error by `selector`, and an
/// unmatched error returns on the wrapper's own error channel unchanged.
/// With [`nothing()`](crate::selector::nothing) (or `()`) as the selector,
/// no interception happens at all — interception is opt-in, not a blanket
/// catch-all.
///
/// The adapter is stateless and reentrant; it owns nothing but the
/// operation and its selector.
///
/// # Example
///
/// Errors outside the selector escape untouched:
///
/// ```rust
/// use resultify::prelude::{resultify, Outcome, nothing};
///
/// let mut operation = resultify(nothing(), |_: ()| Err::<i32, _>("boom"));
///
/// assert_eq!(operation(()), Err("boom"));
/// ```
///
/// Composed under [`retry`](crate::retry()), innermost, so every attempt's
/// error is converted before the retry loop inspects the outcome — see the
/// crate-level example.
pub fn resultify<A, T, E, S, F>(
    selector: S,
    mut operation: F,
) -> impl FnMut(A) -> Result<Outcome<T, E>, E>
where
    F: FnMut(A) -> Result<T, E>,
    S: Selector<E>,
{
    move |args| match operation(args) {
        Ok(value) => Ok(Outcome::Ok(value)),
        Err(error) if selector.matches(&error) => Ok(Outcome::Err(error)),
        Err(error) => Err(error),
    }
}
