//! Shared types for cautious.
//!
//! This crate defines the dynamic [`Value`] model used by the path
//! resolver and the safe-evaluation helpers, together with the
//! [`LookupError`] taxonomy produced when navigation fails.

mod error;
mod value;

pub use error::LookupError;
pub use value::Value;

/// Result type used for value navigation and name resolution.
pub type LookupResult<T> = std::result::Result<T, LookupError>;
