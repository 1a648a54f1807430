//! Defensive evaluation helpers usable from any value.
//!
//! - [`safe_eval()`] / [`nil_chain`] / [`bool_chain`]: run a deferred
//!   computation and turn every failure, panic, or absent result into a
//!   fallback. These never fail.
//! - [`cascade()`] / [`try_cascade`]: run an ordered list of steps once,
//!   stopping at the first [`Exit`], and report the last value recorded.
//! - [`TypeRegistry`], [`SameAs`], [`Presence`]: small object helpers.
//! - [`Guarded`]: all of the above as methods on every type.

mod cascade;
mod compare;
mod mixin;
mod outcome;
mod presence;
pub mod registry;
mod safe_eval;

pub use cascade::{cascade, try_cascade, Exit, Halt, OrHalt, Steps};
pub use compare::{same_as, SameAs};
pub use mixin::Guarded;
pub use outcome::Outcome;
pub use presence::Presence;
pub use registry::{class_exists, register_class, RegistryError, TypeRegistry};
pub use safe_eval::{bool_chain, method_chain, nil_chain, nil_chain_or, safe_eval};

pub use cautious_types::Value;
