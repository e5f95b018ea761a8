//! # Resultify
//!
//! > *Failure is a value, not an event.*
//!
//! A small Rust library for disciplined success/failure handling: a
//! two-variant [`Outcome`] container plus two adapters that bridge it to
//! raw fallible code.
//!
//! ## Philosophy
//!
//! **Resultify** keeps failure handling at exactly one layer:
//! - [`resultify`](resultify()) converts a fallible operation into an
//!   `Outcome`-returning one, intercepting only the errors its
//!   [`Selector`] designates — everything else propagates untouched.
//! - [`retry`](retry()) re-invokes an `Outcome`-producing operation a
//!   bounded number of times, returning the final outcome as a value —
//!   exhaustion is inspectable control flow, never a new failure mode.
//!
//! ## Quick Example
//!
//! ```rust
//! use resultify::prelude::{resultify, retry, Outcome, anything};
//!
//! // A flaky operation: fails twice, then succeeds.
//! let mut calls = 0u32;
//! let flaky = move |target: u32| {
//!     calls += 1;
//!     if calls < 3 {
//!         Err("transient failure")
//!     } else {
//!         Ok(target * 2)
//!     }
//! };
//!
//! // resultify innermost converts each failure to an Err outcome;
//! // retry outermost inspects outcomes and re-invokes on Err.
//! let mut operation = retry(2, resultify(anything(), flaky));
//!
//! match operation(21) {
//!     Ok(Outcome::Ok(value)) => assert_eq!(value, 42),
//!     Ok(Outcome::Err(error)) => panic!("budget exhausted: {}", error),
//!     Err(escaped) => panic!("undesignated error: {}", escaped),
//! }
//! ```
//!
//! For the container's contract (equality, hashing, the fail-loudly
//! accessors) see [`Outcome`]; for interception rules see the
//! [`selector`] module.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod outcome;
pub mod resultify;
pub mod retry;
pub mod selector;
pub mod testing;

// Re-exports
pub use crate::resultify::resultify;
pub use crate::retry::retry;
pub use error::UnwrapError;
pub use outcome::Outcome;
pub use selector::{Selector, SelectorExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::UnwrapError;
    pub use crate::outcome::Outcome;
    pub use crate::resultify::resultify;
    pub use crate::retry::retry;
    pub use crate::selector::{anything, kind, nothing, Selector, SelectorExt};
}
