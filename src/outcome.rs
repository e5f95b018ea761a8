//! A closed two-variant container for success or failure.
//!
//! # Outcome vs std `Result`
//!
//! `Outcome<T, E>` carries the same information as `std::result::Result`,
//! but it is a *return value*, never a propagation channel: the adapters in
//! this crate ([`resultify`](crate::resultify()), [`retry`](crate::retry()))
//! hand an `Outcome` back through an outer `Result` whose `Err` side is
//! reserved for errors that were *not* intercepted. Keeping the two layers
//! as distinct types makes "this failure was captured" and "this failure is
//! still propagating" impossible to confuse.
//!
//! Deliberately, `Outcome` has no combinator algebra — no `map`, no
//! `and_then`. Inspect it with [`is_ok`](Outcome::is_ok) /
//! [`is_err`](Outcome::is_err), take the payload out, or convert to a
//! `Result` and use the standard tools from there.
//!
//! # Examples
//!
//! ```rust
//! use resultify::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse() {
//!         Ok(n) => Outcome::ok(n),
//!         Err(e) => Outcome::err(format!("{}: {}", input, e)),
//!     }
//! }
//!
//! let good = parse("42");
//! assert!(good.is_ok());
//! assert_eq!(good.unwrap_ok(), 42);
//!
//! let bad = parse("forty-two");
//! assert!(bad.is_err());
//! ```

use crate::error::UnwrapError;

/// A value that is exactly one of a success (`Ok`) or a failure (`Err`).
///
/// `Outcome` is a closed union: the two variants are the only forms it can
/// take, both are patterns of this one nominal type, and exhaustive
/// matching needs no catch-all arm. Values are immutable once constructed
/// and freely shareable.
///
/// Equality is structural (same variant and equal payloads), hashing mixes
/// the variant tag so an `Ok` and an `Err` carrying equal payloads stay
/// distinct set entries, and the `Debug` form prints as the constructor
/// expression (`Ok(42)`, `Err("boom")`) that rebuilds an equal value.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The failure payload type
///
/// # Example
///
/// ```rust
/// use resultify::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::ok(1);
/// let err: Outcome<i32, &str> = Outcome::err("boom");
///
/// match ok {
///     Outcome::Ok(n) => assert_eq!(n, 1),
///     Outcome::Err(_) => unreachable!(),
/// }
///
/// assert_ne!(ok, err);
/// assert_eq!(format!("{:?}", err), r#"Err("boom")"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The success variant, carrying the success payload.
    Ok(T),
    /// The failure variant, carrying the failure payload.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a success value.
    ///
    /// The "no payload" case is spelled with the unit marker:
    /// `Outcome::<(), E>::ok(())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::ok(42);
    /// assert!(o.is_ok());
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Create a failure value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::err("boom");
    /// assert!(o.is_err());
    /// ```
    #[inline]
    pub fn err(value: E) -> Self {
        Outcome::Err(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(1);
    /// let err: Outcome<i32, &str> = Outcome::err("boom");
    ///
    /// assert!(ok.is_ok());
    /// assert!(!err.is_ok());
    /// ```
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(1);
    /// let err: Outcome<i32, &str> = Outcome::err("boom");
    ///
    /// assert!(!ok.is_err());
    /// assert!(err.is_err());
    /// ```
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    // ========== Extractors ==========

    /// Returns the success payload if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(42);
    /// let err: Outcome<i32, &str> = Outcome::err("boom");
    ///
    /// assert_eq!(ok.into_ok(), Some(42));
    /// assert_eq!(err.into_ok(), None);
    /// ```
    #[inline]
    pub fn into_ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// Returns the failure payload if present, consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(42);
    /// let err: Outcome<i32, &str> = Outcome::err("boom");
    ///
    /// assert_eq!(ok.into_err(), None);
    /// assert_eq!(err.into_err(), Some("boom"));
    /// ```
    #[inline]
    pub fn into_err(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Convert from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let ok: Outcome<String, String> = Outcome::ok("yay".to_string());
    /// assert_eq!(ok.as_ref().try_ok(), Ok(&"yay".to_string()));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Extract the success payload, panicking on an `Err` value.
    ///
    /// The mismatch is a programming logic error; this accessor never
    /// silently returns a default. For a non-panicking form, see
    /// [`try_ok`](Outcome::try_ok).
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Err`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(42);
    /// assert_eq!(ok.unwrap_ok(), 42);
    /// ```
    #[inline]
    pub fn unwrap_ok(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => panic!("{}", UnwrapError::ExpectedOk),
        }
    }

    /// Extract the failure payload, panicking on an `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is an `Ok`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::err("boom");
    /// assert_eq!(err.unwrap_err(), "boom");
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => panic!("{}", UnwrapError::ExpectedErr),
            Outcome::Err(error) => error,
        }
    }

    /// Extract the success payload, or report the mismatch as a value.
    ///
    /// The catchable counterpart of [`unwrap_ok`](Outcome::unwrap_ok):
    /// on an `Err` value this returns [`UnwrapError::ExpectedOk`], which a
    /// caller can handle specifically since it is a dedicated error type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::{Outcome, UnwrapError};
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(42);
    /// let err: Outcome<i32, &str> = Outcome::err("boom");
    ///
    /// assert_eq!(ok.try_ok(), Ok(42));
    /// assert_eq!(err.try_ok(), Err(UnwrapError::ExpectedOk));
    /// ```
    #[inline]
    pub fn try_ok(self) -> Result<T, UnwrapError> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(_) => Err(UnwrapError::ExpectedOk),
        }
    }

    /// Extract the failure payload, or report the mismatch as a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::{Outcome, UnwrapError};
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(42);
    /// let err: Outcome<i32, &str> = Outcome::err("boom");
    ///
    /// assert_eq!(err.try_err(), Ok("boom"));
    /// assert_eq!(ok.try_err(), Err(UnwrapError::ExpectedErr));
    /// ```
    #[inline]
    pub fn try_err(self) -> Result<E, UnwrapError> {
        match self {
            Outcome::Ok(_) => Err(UnwrapError::ExpectedErr),
            Outcome::Err(error) => Ok(error),
        }
    }

    // ========== Conversions ==========

    /// Convert to a standard `Result`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::ok(42);
    /// assert_eq!(ok.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Convert from a standard `Result`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resultify::Outcome;
    ///
    /// let o = Outcome::from_result(Err::<i32, _>("boom"));
    /// assert_eq!(o, Outcome::err("boom"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> Default for Outcome<T, E>
where
    T: Default,
{
    /// The default outcome is a success carrying the payload type's
    /// default — the unit marker for `Outcome<(), E>` — never a truthy
    /// boolean.
    fn default() -> Self {
        Outcome::Ok(T::default())
    }
}
