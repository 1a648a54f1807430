//! Scoped variable environment.

use crate::path::Path;
use cautious_types::{LookupError, LookupResult, Value};
use std::collections::BTreeMap;

/// A single scope level.
#[derive(Debug, Clone, Default)]
struct Frame {
    bindings: BTreeMap<String, Value>,
}

/// Scoped variable environment with push/pop semantics.
///
/// Names are looked up from the innermost frame outward. `define` always
/// binds in the innermost frame; `set` rebinds in the first frame where the
/// name already exists.
#[derive(Debug, Clone)]
pub struct Scope {
    frames: Vec<Frame>,
}

impl Scope {
    /// Create a scope with one global frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
        }
    }

    /// Create a scope whose global frame holds the members of a JSON object.
    pub fn from_json(json: serde_json::Value) -> LookupResult<Self> {
        let serde_json::Value::Object(map) = json else {
            return Err(LookupError::TypeMismatch(
                "scope bindings must be a JSON object".into(),
            ));
        };
        let mut scope = Self::new();
        for (name, value) in map {
            scope.define(&name, Value::from(value));
        }
        Ok(scope)
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Frame::default());
    }

    /// Pop the innermost frame. The global frame is never popped.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Bind a name in the innermost frame.
    pub fn define(&mut self, name: &str, value: impl Into<Value>) {
        if let Some(frame) = self.frames.last_mut() {
            frame.bindings.insert(name.to_string(), value.into());
        }
    }

    /// Rebind a name in the first frame where it exists.
    /// Returns `false` if the name is not bound anywhere.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> bool {
        for frame in self.frames.iter_mut().rev() {
            if let Some(slot) = frame.bindings.get_mut(name) {
                *slot = value.into();
                return true;
            }
        }
        false
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.bindings.get(name))
    }

    /// Look up a name, failing with [`LookupError::UndefinedName`] if it is
    /// not bound. A name bound to `nil` is found.
    pub fn lookup(&self, name: &str) -> LookupResult<Value> {
        self.get(name)
            .cloned()
            .ok_or_else(|| LookupError::UndefinedName(name.to_string()))
    }

    /// Parse and walk a path expression against this scope.
    pub fn resolve(&self, path: &str) -> LookupResult<Value> {
        Path::parse(path)?.resolve(self)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
