//! Re-invoke an [`Outcome`]-producing operation until it succeeds or a
//! fixed attempt budget runs out.
//!
//! The budget counts *additional* attempts beyond the first, so
//! `retry(n, op)` makes at most `n + 1` invocations. Attempts run strictly
//! sequentially with no delay and no backoff; each runs to completion
//! before the next begins. Exhaustion is not an error: the wrapper returns
//! the last `Outcome::Err` it observed, inspectable by ordinary control
//! flow.
//!
//! The retry loop inspects only `Outcome` values. An error on the raw
//! channel — one the inner [`resultify`](crate::resultify()) selector did
//! not designate — is an adapter failure, not an attempt failure: it
//! propagates immediately and consumes no budget.
//!
//! # Example
//!
//! ```rust
//! use resultify::prelude::{resultify, retry, Outcome, anything};
//!
//! let mut calls = 0u32;
//! let mut operation = retry(2, resultify(anything(), move |target: u32| {
//!     calls += 1;
//!     if calls < 3 {
//!         Err("transient failure")
//!     } else {
//!         Ok(target * 2)
//!     }
//! }));
//!
//! assert_eq!(operation(21), Ok(Outcome::ok(42)));
//! ```

use crate::outcome::Outcome;

/// Wrap an operation so that an `Err` outcome is retried up to `retries`
/// additional times.
///
/// `op` is expected to already return an [`Outcome`] on its success
/// channel — typically it is the output of
/// [`resultify`](crate::resultify()), applied innermost so each attempt's
/// error is converted before the loop inspects it. The wrapper re-invokes
/// `op` with the same arguments (`A: Clone`), short-circuits on the first
/// `Outcome::Ok`, and never raises on exhaustion.
///
/// With `retries == 0` the operation is invoked exactly once, whatever the
/// outcome.
///
/// # Example
///
/// ```rust
/// use resultify::prelude::{resultify, retry, Outcome, anything};
///
/// // A budget of 1 allows two invocations in total.
/// let mut calls = 0u32;
/// let mut operation = retry(1, resultify(anything(), move |_: ()| {
///     calls += 1;
///     Err::<(), _>(format!("failure {}", calls))
/// }));
///
/// // Budget exhausted: the last observed Err is returned as a value.
/// assert_eq!(operation(()), Ok(Outcome::err("failure 2".to_string())));
/// ```
pub fn retry<A, T, E, X, F>(
    retries: u32,
    mut op: F,
) -> impl FnMut(A) -> Result<Outcome<T, E>, X>
where
    A: Clone,
    F: FnMut(A) -> Result<Outcome<T, E>, X>,
{
    move |args| {
        let mut last = op(args.clone())?;
        let mut made = 1u32;
        while last.is_err() && made <= retries {
            #[cfg(feature = "tracing")]
            tracing::debug!(attempt = made, retries, "outcome was Err, retrying");
            last = op(args.clone())?;
            made += 1;
        }
        #[cfg(feature = "tracing")]
        if last.is_err() {
            tracing::debug!(attempts = made, "retry budget exhausted");
        }
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resultify::resultify;
    use crate::selector::anything;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn flaky(
        failures: u32,
        attempts: &AtomicU32,
    ) -> impl FnMut(()) -> Result<&'static str, &'static str> + '_ {
        move |_| {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            if n < failures {
                Err("transient failure")
            } else {
                Ok("success")
            }
        }
    }

    #[test]
    fn succeeds_within_budget() {
        let attempts = AtomicU32::new(0);
        let mut op = retry(5, resultify(anything(), flaky(2, &attempts)));

        let outcome = op(()).unwrap();
        assert_eq!(outcome, Outcome::ok("success"));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn short_circuits_on_first_success() {
        let attempts = AtomicU32::new(0);
        let mut op = retry(5, resultify(anything(), flaky(0, &attempts)));

        let outcome = op(()).unwrap();
        assert!(outcome.is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exhaustion_returns_the_last_err() {
        let attempts = AtomicU32::new(0);
        let mut op = retry(3, resultify(anything(), flaky(u32::MAX, &attempts)));

        let outcome = op(()).unwrap();
        assert_eq!(outcome, Outcome::err("transient failure"));
        assert_eq!(attempts.load(Ordering::SeqCst), 4); // 1 initial + 3 retries
    }

    #[test]
    fn zero_budget_invokes_exactly_once() {
        let attempts = AtomicU32::new(0);
        let mut op = retry(0, resultify(anything(), flaky(u32::MAX, &attempts)));

        assert!(op(()).unwrap().is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);

        let attempts = AtomicU32::new(0);
        let mut op = retry(0, resultify(anything(), flaky(0, &attempts)));

        assert!(op(()).unwrap().is_ok());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn escaping_error_bypasses_the_loop() {
        #[derive(Debug, PartialEq)]
        enum TestError {
            Transient,
            Permanent,
        }

        let attempts = AtomicU32::new(0);
        let transient_only = |e: &TestError| matches!(e, TestError::Transient);
        let mut op = retry(
            5,
            resultify(transient_only, |_: ()| {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(TestError::Permanent)
            }),
        );

        assert_eq!(op(()), Err(TestError::Permanent));
        assert_eq!(attempts.load(Ordering::SeqCst), 1); // no retries for an escaping error
    }

    #[test]
    fn arguments_are_replayed_on_each_attempt() {
        let attempts = AtomicU32::new(0);
        let mut op = retry(
            2,
            resultify(anything(), |n: u32| {
                if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err("not yet")
                } else {
                    Ok(n * 2)
                }
            }),
        );

        assert_eq!(op(21).unwrap(), Outcome::ok(42));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
