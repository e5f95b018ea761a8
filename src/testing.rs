//! Testing utilities for code that produces [`Outcome`] values.
//!
//! This module provides assertion macros for the two variants and, behind
//! the `proptest` feature, an `Arbitrary` implementation so downstream
//! property tests can generate outcomes directly.
//!
//! # Assertion Macros
//!
//! ```rust
//! use resultify::{assert_err, assert_ok, Outcome};
//!
//! let ok: Outcome<i32, String> = Outcome::ok(42);
//! assert_ok!(ok);
//!
//! let err: Outcome<i32, String> = Outcome::err("boom".to_string());
//! assert_err!(err);
//! ```

#[cfg(feature = "proptest")]
use crate::outcome::Outcome;

/// Assert that an outcome is `Ok`.
///
/// This macro will panic if the outcome is an `Err`.
///
/// # Example
///
/// ```rust
/// use resultify::{assert_ok, Outcome};
///
/// let outcome: Outcome<_, Vec<String>> = Outcome::ok(42);
/// assert_ok!(outcome);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Ok(_) => {}
            $crate::Outcome::Err(e) => {
                panic!("Expected Ok, got Err: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is `Err`.
///
/// This macro will panic if the outcome is an `Ok`.
///
/// # Example
///
/// ```rust
/// use resultify::{assert_err, Outcome};
///
/// let outcome: Outcome<i32, _> = Outcome::err("boom");
/// assert_err!(outcome);
/// ```
#[macro_export]
macro_rules! assert_err {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Err(_) => {}
            $crate::Outcome::Ok(v) => {
                panic!("Expected Err, got Ok: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is `Err` with a specific payload.
///
/// This macro will panic if the outcome is an `Ok` or if the payload does
/// not compare equal to the expected one.
///
/// # Example
///
/// ```rust
/// use resultify::{assert_err_eq, Outcome};
///
/// let outcome: Outcome<i32, _> = Outcome::err("boom");
/// assert_err_eq!(outcome, "boom");
/// ```
#[macro_export]
macro_rules! assert_err_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Err(e) => {
                assert_eq!(e, $expected);
            }
            $crate::Outcome::Ok(v) => {
                panic!(
                    "Expected Err with payload {:?}, got Ok: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Outcome::ok),
            any_with::<E>(e_params).prop_map(Outcome::err),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Outcome;

    #[test]
    fn assert_ok_macro() {
        let outcome: Outcome<_, Vec<String>> = Outcome::ok(42);
        assert_ok!(outcome);
    }

    #[test]
    fn assert_err_macro() {
        let outcome: Outcome<i32, _> = Outcome::err("boom".to_string());
        assert_err!(outcome);
    }

    #[test]
    fn assert_err_eq_macro() {
        let outcome: Outcome<i32, _> = Outcome::err("boom");
        assert_err_eq!(outcome, "boom");
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Err")]
    fn assert_ok_panics_on_err() {
        let outcome: Outcome<i32, _> = Outcome::err("boom".to_string());
        assert_ok!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected Err, got Ok")]
    fn assert_err_panics_on_ok() {
        let outcome: Outcome<_, Vec<String>> = Outcome::ok(42);
        assert_err!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected Err with payload")]
    fn assert_err_eq_panics_on_ok() {
        let outcome: Outcome<_, Vec<String>> = Outcome::ok(42);
        assert_err_eq!(outcome, vec!["boom".to_string()]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_valid_instances(
                outcome in any::<Outcome<i32, String>>()
            ) {
                match &outcome {
                    Outcome::Ok(_) => prop_assert!(outcome.is_ok()),
                    Outcome::Err(_) => prop_assert!(outcome.is_err()),
                }
            }
        }
    }
}
