//! Method-call access to the helpers from any type.
//!
//! [`Guarded`] is implemented for every type, so the helpers are available
//! as `self.nil_chain(..)` inside any impl block or trait default method,
//! and as `value.bool_chain(..)` on any value. The receiver itself takes no
//! part in the evaluation.

use crate::cascade::{self, Exit, Halt, Steps};
use crate::outcome::Outcome;
use crate::{registry, safe_eval};

pub trait Guarded {
    /// See [`safe_eval::nil_chain`].
    fn nil_chain<O, F>(&self, compute: F) -> Option<O::Output>
    where
        O: Outcome,
        F: FnOnce() -> O,
    {
        safe_eval::nil_chain(compute)
    }

    /// See [`safe_eval::nil_chain_or`].
    fn nil_chain_or<O, F>(&self, fallback: O::Output, compute: F) -> O::Output
    where
        O: Outcome,
        F: FnOnce() -> O,
    {
        safe_eval::nil_chain_or(fallback, compute)
    }

    /// See [`safe_eval::method_chain`].
    fn method_chain<O, F>(&self, compute: F) -> Option<O::Output>
    where
        O: Outcome,
        F: FnOnce() -> O,
    {
        safe_eval::method_chain(compute)
    }

    /// See [`safe_eval::bool_chain`].
    fn bool_chain<O, F>(&self, compute: F) -> O::Output
    where
        O: Outcome,
        O::Output: From<bool>,
        F: FnOnce() -> O,
    {
        safe_eval::bool_chain(compute)
    }

    /// See [`cascade::cascade`].
    fn cascade<T, F>(&self, compute: F) -> Option<T>
    where
        F: FnOnce(&mut Steps<T>) -> Result<(), Exit>,
    {
        cascade::cascade(compute)
    }

    /// See [`cascade::try_cascade`].
    fn try_cascade<T, E, F>(&self, compute: F) -> Result<Option<T>, E>
    where
        F: FnOnce(&mut Steps<T>) -> Result<(), Halt<E>>,
    {
        cascade::try_cascade(compute)
    }

    /// Query the process-wide type registry.
    fn class_exists(&self, name: impl AsRef<str>) -> bool {
        registry::class_exists(name)
    }
}

impl<T: ?Sized> Guarded for T {}
