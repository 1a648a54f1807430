//! Safe deferred evaluation.
//!
//! Every helper here runs its computation once, immediately, behind a single
//! catch-all boundary. An `Err`, a panic, `None`, or [`Value::Nil`] all take
//! the same fallback path; no failure ever reaches the caller and nothing is
//! reported. Side effects the computation performed before failing stay done.
//!
//! Panics are only absorbed when the build unwinds. Under `panic = "abort"`
//! a panicking computation still aborts the process, and with unwinding the
//! installed panic hook still runs (the default hook prints the message).
//!
//! [`Value::Nil`]: cautious_types::Value::Nil

use crate::outcome::Outcome;
use std::panic::{self, AssertUnwindSafe};

/// Run `compute` and keep its result only if it is present.
fn attempt<O, F>(compute: F) -> Option<O::Output>
where
    O: Outcome,
    F: FnOnce() -> O,
{
    panic::catch_unwind(AssertUnwindSafe(compute))
        .ok()
        .and_then(Outcome::into_present)
}

/// Evaluate `compute`, returning `fallback` if it fails or produces no value.
///
/// ```
/// use cautious_core::safe_eval;
///
/// let params = std::collections::HashMap::from([("foo", "bar")]);
/// assert_eq!(safe_eval("gotcha!", || params.get("bogus_key").copied()), "gotcha!");
/// assert_eq!(safe_eval("gotcha!", || params.get("foo").copied()), "bar");
/// ```
pub fn safe_eval<O, F>(fallback: O::Output, compute: F) -> O::Output
where
    O: Outcome,
    F: FnOnce() -> O,
{
    attempt(compute).unwrap_or(fallback)
}

/// Evaluate `compute`, with absence (`None`) as the fallback.
///
/// A present result is returned as-is, even when it is `false` or empty.
pub fn nil_chain<O, F>(compute: F) -> Option<O::Output>
where
    O: Outcome,
    F: FnOnce() -> O,
{
    attempt(compute)
}

/// [`nil_chain`] with an explicit fallback. Same as [`safe_eval`].
pub fn nil_chain_or<O, F>(fallback: O::Output, compute: F) -> O::Output
where
    O: Outcome,
    F: FnOnce() -> O,
{
    safe_eval(fallback, compute)
}

/// Alias of [`nil_chain`].
pub fn method_chain<O, F>(compute: F) -> Option<O::Output>
where
    O: Outcome,
    F: FnOnce() -> O,
{
    nil_chain(compute)
}

/// Evaluate `compute`, with `false` as the fallback.
///
/// A present result is not coerced: a computation producing the string
/// `"foo"` yields `"foo"`, not `true`. Failure and absence yield `false`.
pub fn bool_chain<O, F>(compute: F) -> O::Output
where
    O: Outcome,
    O::Output: From<bool>,
    F: FnOnce() -> O,
{
    attempt(compute).unwrap_or_else(|| false.into())
}
