//! Name resolution for cautious values.
//!
//! A [`Scope`] binds names to [`Value`]s; a [`Path`] such as
//! `a.b.c.hello` or `params[:foo]` walks from a bound name through
//! members and keys. Every way a walk can fail is reported as a
//! [`LookupError`], which is what the safe-evaluation helpers absorb.

mod path;
mod scope;

pub use path::{Path, Segment};
pub use scope::Scope;

pub use cautious_types::{LookupError, LookupResult, Value};
