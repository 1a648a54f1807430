//! Lookup error types.

use thiserror::Error;

/// Why a navigation step or name lookup could not produce a value.
///
/// The safe-evaluation helpers treat every variant identically; the
/// distinctions exist for callers that resolve paths directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A referenced name is not bound in any scope.
    #[error("undefined name: {0}")]
    UndefinedName(String),

    /// A strict key lookup (`fetch`) found nothing.
    #[error("missing key: {0}")]
    MissingKey(String),

    /// The receiver has no member with this name.
    #[error("undefined member '{member}' for {type_name}")]
    NoSuchMember { type_name: String, member: String },

    /// Member access or indexing on `nil`.
    #[error("nil access: {0}")]
    NilAccess(String),

    /// The receiver cannot be navigated the way the step asks.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A path expression could not be parsed.
    #[error("syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

impl LookupError {
    /// Shorthand for [`LookupError::NoSuchMember`].
    pub fn no_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::NoSuchMember {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Shorthand for [`LookupError::Syntax`].
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }
}
