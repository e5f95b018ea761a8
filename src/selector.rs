//! Selectors decide which errors the [`resultify`](crate::resultify())
//! adapter may intercept.
//!
//! A selector is a composable predicate over error values. Interception is
//! opt-in: the adapter captures an error as an [`Outcome::Err`] payload only
//! when its selector matches, and lets every other error propagate
//! unchanged. Selectors can be combined with logical operators (`or`,
//! `and`, `not`) and grouped in tuples, building precise interception
//! rules from simple, reusable pieces.
//!
//! # Example
//!
//! ```rust
//! use resultify::selector::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum TestError {
//!     Transient,
//!     Permanent,
//! }
//!
//! // Intercept transient failures only
//! let transient = |e: &TestError| matches!(e, TestError::Transient);
//! assert!(transient.matches(&TestError::Transient));
//! assert!(!transient.matches(&TestError::Permanent));
//!
//! // Zero selectors intercept nothing
//! assert!(!nothing().matches(&TestError::Transient));
//! ```
//!
//! # Kind selectors
//!
//! For operations that surface a boxed `dyn Error`, [`kind`] selects by
//! nominal error type, matching the error itself or any cause in its
//! `source()` chain:
//!
//! ```rust
//! use resultify::selector::{kind, Selector};
//! use std::error::Error;
//! use std::num::ParseIntError;
//!
//! let error: Box<dyn Error + Send + Sync> =
//!     Box::new("nope".parse::<i32>().unwrap_err());
//!
//! assert!(kind::<ParseIntError>().matches(&error));
//! assert!(!kind::<std::io::Error>().matches(&error));
//! ```
//!
//! [`Outcome::Err`]: crate::Outcome::Err

use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;

/// A composable predicate over error values of type `E`.
///
/// Any `Fn(&E) -> bool` closure is a selector; so is a tuple of selectors
/// (matching when any component matches), and the combinators built with
/// [`SelectorExt`].
///
/// # Example
///
/// ```rust
/// use resultify::selector::{Selector, SelectorExt};
///
/// let nonempty = |e: &String| !e.is_empty();
/// let shouty = |e: &String| e.ends_with('!');
///
/// let s = nonempty.and(shouty);
/// assert!(s.matches(&"boom!".to_string()));
/// assert!(!s.matches(&"boom".to_string()));
/// ```
pub trait Selector<E: ?Sized>: Send + Sync {
    /// Check whether the error may be intercepted by this selector.
    fn matches(&self, error: &E) -> bool;
}

// Blanket impl for closures
impl<E: ?Sized, F> Selector<E> for F
where
    F: Fn(&E) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, error: &E) -> bool {
        self(error)
    }
}

/// Zero selectors configured: intercepts nothing.
impl<E: ?Sized> Selector<E> for () {
    #[inline]
    fn matches(&self, _error: &E) -> bool {
        false
    }
}

/// Extension trait for selector combinators.
///
/// All methods return concrete types for zero-cost abstraction.
///
/// # Example
///
/// ```rust
/// use resultify::selector::{Selector, SelectorExt};
///
/// let s = (|e: &i32| *e < 0).or(|e: &i32| *e > 100).not();
/// assert!(s.matches(&50));
/// assert!(!s.matches(&-5));
/// ```
pub trait SelectorExt<E: ?Sized>: Selector<E> + Sized {
    /// Match when either selector matches.
    fn or<S: Selector<E>>(self, other: S) -> Or<Self, S> {
        Or(self, other)
    }

    /// Match only when both selectors match.
    fn and<S: Selector<E>>(self, other: S) -> And<Self, S> {
        And(self, other)
    }

    /// Invert this selector.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<E: ?Sized, S: Selector<E>> SelectorExt<E> for S {}

/// Selector combining two selectors with OR logic. See [`SelectorExt::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<E: ?Sized, A, B> Selector<E> for Or<A, B>
where
    A: Selector<E>,
    B: Selector<E>,
{
    #[inline]
    fn matches(&self, error: &E) -> bool {
        self.0.matches(error) || self.1.matches(error)
    }
}

/// Selector combining two selectors with AND logic. See [`SelectorExt::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<E: ?Sized, A, B> Selector<E> for And<A, B>
where
    A: Selector<E>,
    B: Selector<E>,
{
    #[inline]
    fn matches(&self, error: &E) -> bool {
        self.0.matches(error) && self.1.matches(error)
    }
}

/// Selector inverting another selector. See [`SelectorExt::not`].
#[derive(Debug, Clone, Copy)]
pub struct Not<S>(S);

impl<E: ?Sized, S> Selector<E> for Not<S>
where
    S: Selector<E>,
{
    #[inline]
    fn matches(&self, error: &E) -> bool {
        !self.0.matches(error)
    }
}

/// Selector that matches no error. See [`nothing`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Nothing;

impl<E: ?Sized> Selector<E> for Nothing {
    #[inline]
    fn matches(&self, _error: &E) -> bool {
        false
    }
}

/// A selector that matches no error.
///
/// The explicit spelling of the zero-selector configuration: an adapter
/// configured with `nothing()` performs no interception, so every error
/// propagates to the caller.
///
/// # Example
///
/// ```rust
/// use resultify::selector::{nothing, Selector};
///
/// assert!(!nothing().matches(&"any error"));
/// ```
pub fn nothing() -> Nothing {
    Nothing
}

/// Selector that matches every error. See [`anything`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

impl<E: ?Sized> Selector<E> for Anything {
    #[inline]
    fn matches(&self, _error: &E) -> bool {
        true
    }
}

/// A selector that matches every error.
///
/// An explicit opt-in catch-all; there is no implicit one.
///
/// # Example
///
/// ```rust
/// use resultify::selector::{anything, Selector};
///
/// assert!(anything().matches(&"any error"));
/// ```
pub fn anything() -> Anything {
    Anything
}

/// Selector matching errors of nominal kind `K`. See [`kind`].
#[derive(Clone, Copy)]
pub struct Kind<K> {
    marker: PhantomData<fn() -> K>,
}

impl<K> fmt::Debug for Kind<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kind")
            .field("kind", &std::any::type_name::<K>())
            .finish()
    }
}

/// A selector matching boxed errors of nominal kind `K`.
///
/// Matches when the error downcasts to `K`, or when any cause in its
/// `source()` chain does — so wrapping an intercepted kind inside another
/// error does not hide it from the selector.
///
/// # Example
///
/// ```rust
/// use resultify::selector::{kind, Selector};
/// use std::error::Error;
/// use std::num::ParseIntError;
///
/// let parse: Box<dyn Error + Send + Sync> =
///     Box::new("x".parse::<i32>().unwrap_err());
///
/// assert!(kind::<ParseIntError>().matches(&parse));
/// ```
pub fn kind<K>() -> Kind<K>
where
    K: StdError + 'static,
{
    Kind {
        marker: PhantomData,
    }
}

fn chain_matches<K>(error: &(dyn StdError + 'static)) -> bool
where
    K: StdError + 'static,
{
    if error.is::<K>() {
        return true;
    }
    let mut source = error.source();
    while let Some(cause) = source {
        if cause.is::<K>() {
            return true;
        }
        source = cause.source();
    }
    false
}

impl<K> Selector<Box<dyn StdError + Send + Sync>> for Kind<K>
where
    K: StdError + 'static,
{
    fn matches(&self, error: &Box<dyn StdError + Send + Sync>) -> bool {
        chain_matches::<K>(error.as_ref())
    }
}

impl<K> Selector<Box<dyn StdError>> for Kind<K>
where
    K: StdError + 'static,
{
    fn matches(&self, error: &Box<dyn StdError>) -> bool {
        chain_matches::<K>(error.as_ref())
    }
}

// Tuples of selectors match when any component matches, so
// `resultify((kind::<A>(), kind::<B>()), op)` reads as a list of
// intercepted kinds.
macro_rules! tuple_selector {
    ($($name:ident),+) => {
        impl<Err: ?Sized, $($name),+> Selector<Err> for ($($name,)+)
        where
            $($name: Selector<Err>,)+
        {
            fn matches(&self, error: &Err) -> bool {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                $($name.matches(error))||+
            }
        }
    };
}

tuple_selector!(A);
tuple_selector!(A, B);
tuple_selector!(A, B, C);
tuple_selector!(A, B, C, D);
tuple_selector!(A, B, C, D, E2);
tuple_selector!(A, B, C, D, E2, F2);
tuple_selector!(A, B, C, D, E2, F2, G);
tuple_selector!(A, B, C, D, E2, F2, G, H);

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Transient,
        Permanent,
    }

    #[derive(Debug)]
    struct RootError;

    impl fmt::Display for RootError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "root error")
        }
    }

    impl StdError for RootError {}

    #[derive(Debug)]
    struct WrapperError {
        source: RootError,
    }

    impl fmt::Display for WrapperError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapper around {}", self.source)
        }
    }

    impl StdError for WrapperError {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.source)
        }
    }

    #[test]
    fn closure_is_a_selector() {
        let transient = |e: &TestError| matches!(e, TestError::Transient);
        assert!(transient.matches(&TestError::Transient));
        assert!(!transient.matches(&TestError::Permanent));
    }

    #[test]
    fn unit_and_nothing_match_nothing() {
        assert!(!().matches(&TestError::Transient));
        assert!(!nothing().matches(&TestError::Transient));
    }

    #[test]
    fn anything_matches_everything() {
        assert!(anything().matches(&TestError::Transient));
        assert!(anything().matches(&TestError::Permanent));
    }

    #[test]
    fn tuple_matches_any_component() {
        let s = (
            |e: &TestError| matches!(e, TestError::Transient),
            |e: &TestError| matches!(e, TestError::Permanent),
        );
        assert!(s.matches(&TestError::Transient));
        assert!(s.matches(&TestError::Permanent));

        let s = (nothing(), nothing());
        assert!(!s.matches(&TestError::Transient));
    }

    #[test]
    fn combinators() {
        let s = (|e: &i32| *e > 0).and(|e: &i32| *e < 10);
        assert!(s.matches(&5));
        assert!(!s.matches(&50));

        let s = (|e: &i32| *e < 0).or(|e: &i32| *e > 100);
        assert!(s.matches(&-1));
        assert!(s.matches(&101));
        assert!(!s.matches(&50));

        let s = SelectorExt::<i32>::not(anything());
        assert!(!s.matches(&0));
    }

    #[test]
    fn kind_matches_the_boxed_type() {
        let error: Box<dyn StdError + Send + Sync> = Box::new(RootError);
        assert!(kind::<RootError>().matches(&error));
        assert!(!kind::<WrapperError>().matches(&error));
    }

    #[test]
    fn kind_matches_through_the_source_chain() {
        let error: Box<dyn StdError + Send + Sync> =
            Box::new(WrapperError { source: RootError });
        assert!(kind::<WrapperError>().matches(&error));
        assert!(kind::<RootError>().matches(&error));
        assert!(!kind::<std::io::Error>().matches(&error));
    }

    #[test]
    fn kind_debug_names_the_kind() {
        let s = kind::<RootError>();
        assert!(format!("{:?}", s).contains("RootError"));
    }
}
