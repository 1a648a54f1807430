//! The dynamic value model.
//!
//! [`Value::Nil`] is the absence-of-value marker. It is distinct from every
//! data value, including `false`, the empty string and empty containers.

use crate::{LookupError, LookupResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// No value.
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    String(String),
    /// An interned-style name such as `:foo`. Displays without the colon.
    Symbol(String),
    List(Vec<Value>),
    /// A keyed collection of fields, optionally tagged with a type name.
    ///
    /// Fields double as members: `record.field` and `record[:field]` both
    /// reach the same entry.
    Record {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        type_name: Option<String>,
        fields: BTreeMap<String, Value>,
    },
}

impl Value {
    // ══════════════════════════════════════════════════════════════════════
    // Construction
    // ══════════════════════════════════════════════════════════════════════

    /// Create a symbol value.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Create an untyped record from `(name, value)` pairs.
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Record {
            type_name: None,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Create a record tagged with a type name.
    pub fn typed_record<I, K, V>(type_name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Record {
            type_name: Some(type_name.into()),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Inspection
    // ══════════════════════════════════════════════════════════════════════

    /// `true` only for [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Everything except `nil` and `false` is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Name of the value's type, as used in error messages.
    ///
    /// Typed records report their own type name.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::List(_) => "list",
            Self::Record {
                type_name: Some(name),
                ..
            } => name,
            Self::Record { .. } => "record",
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Navigation
    // ══════════════════════════════════════════════════════════════════════

    /// Access a member: a record field, or one of the built-in zero-argument
    /// methods of the receiver's type.
    ///
    /// Every value answers `nil?`, `to_s` and `class`. Anything else on `nil`
    /// is a [`LookupError::NilAccess`]; an unknown member on any other value
    /// is a [`LookupError::NoSuchMember`].
    pub fn member(&self, name: &str) -> LookupResult<Value> {
        match name {
            "nil?" => return Ok(Value::Bool(self.is_nil())),
            "to_s" => return Ok(Value::String(self.to_string())),
            "class" => return Ok(Value::String(self.type_name().to_string())),
            _ => {}
        }

        let found = match self {
            Self::Nil => {
                return Err(LookupError::NilAccess(format!(
                    "undefined member '{name}' for nil"
                )))
            }
            Self::Record { fields, .. } => fields.get(name).cloned(),
            Self::String(s) => string_member(s, name),
            Self::Symbol(s) => match name {
                "to_sym" => Some(self.clone()),
                "length" | "size" => Some(Value::Number(s.chars().count() as f64)),
                "upcase" => Some(Value::Symbol(s.to_uppercase())),
                "downcase" => Some(Value::Symbol(s.to_lowercase())),
                _ => None,
            },
            Self::List(items) => match name {
                "length" | "size" => Some(Value::Number(items.len() as f64)),
                "first" => Some(items.first().cloned().unwrap_or_default()),
                "last" => Some(items.last().cloned().unwrap_or_default()),
                "empty?" => Some(Value::Bool(items.is_empty())),
                _ => None,
            },
            Self::Number(n) => match name {
                "abs" => Some(Value::Number(n.abs())),
                "floor" => Some(Value::Number(n.floor())),
                "ceil" => Some(Value::Number(n.ceil())),
                "round" => Some(Value::Number(n.round())),
                "to_i" => Some(Value::Number(n.trunc())),
                "zero?" => Some(Value::Bool(*n == 0.0)),
                _ => None,
            },
            Self::Bool(_) => None,
        };

        found.ok_or_else(|| LookupError::no_member(self.type_name(), name))
    }

    /// Index into the value with `key`.
    ///
    /// A key that is simply not there yields `nil` (records by field name,
    /// lists and strings by position, negative positions count from the
    /// end). Indexing `nil` or a value that has no notion of keys fails.
    pub fn index(&self, key: &Value) -> LookupResult<Value> {
        match self {
            Self::Nil => Err(LookupError::NilAccess(format!(
                "cannot index nil with {}",
                key.inspect()
            ))),
            Self::Record { fields, .. } => {
                let name = key_name(key).ok_or_else(|| {
                    LookupError::TypeMismatch(format!(
                        "record keys are strings or symbols, got {}",
                        key.type_name()
                    ))
                })?;
                Ok(fields.get(name).cloned().unwrap_or_default())
            }
            Self::List(items) => {
                let pos = position(key, items.len())?;
                Ok(pos.map(|i| items[i].clone()).unwrap_or_default())
            }
            Self::String(s) => {
                let chars: Vec<char> = s.chars().collect();
                let pos = position(key, chars.len())?;
                Ok(pos
                    .map(|i| Value::String(chars[i].to_string()))
                    .unwrap_or_default())
            }
            _ => Err(LookupError::TypeMismatch(format!(
                "cannot index {}",
                self.type_name()
            ))),
        }
    }

    /// Strict indexing: like [`Value::index`], but a key that is not there
    /// is a [`LookupError::MissingKey`] instead of `nil`.
    pub fn fetch(&self, key: &Value) -> LookupResult<Value> {
        let present = match self {
            Self::Record { fields, .. } => key_name(key).is_some_and(|k| fields.contains_key(k)),
            Self::List(items) => matches!(position(key, items.len()), Ok(Some(_))),
            Self::String(s) => matches!(position(key, s.chars().count()), Ok(Some(_))),
            _ => true,
        };
        if present {
            self.index(key)
        } else {
            Err(LookupError::MissingKey(key.inspect()))
        }
    }

    /// Replace (or add) a record field.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> LookupResult<()> {
        match self {
            Self::Record { fields, .. } => {
                fields.insert(name.into(), value.into());
                Ok(())
            }
            other => Err(LookupError::TypeMismatch(format!(
                "cannot set a field on {}",
                other.type_name()
            ))),
        }
    }

    /// Debug-style rendering: strings quoted, symbols prefixed with `:`.
    pub fn inspect(&self) -> String {
        match self {
            Self::Nil => "nil".to_string(),
            Self::String(s) => format!("{s:?}"),
            Self::Symbol(s) => format!(":{s}"),
            Self::List(items) => {
                let inner: Vec<String> = items.iter().map(Value::inspect).collect();
                format!("[{}]", inner.join(", "))
            }
            Self::Record { type_name, fields } => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(k, v)| format!("{k}: {}", v.inspect()))
                    .collect();
                match type_name {
                    Some(name) => format!("{name} {{ {} }}", inner.join(", ")),
                    None => format!("{{ {} }}", inner.join(", ")),
                }
            }
            other => other.to_string(),
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // JSON interop
    // ══════════════════════════════════════════════════════════════════════

    /// Convert into plain JSON. Symbols become strings; record type names
    /// are dropped; non-finite numbers become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Self::Nil => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Number(n) => {
                if is_integral(*n) {
                    Json::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n).map_or(Json::Null, Json::Number)
                }
            }
            Self::String(s) | Self::Symbol(s) => Json::String(s.clone()),
            Self::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Self::Record { fields, .. } => Json::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn string_member(s: &str, name: &str) -> Option<Value> {
    match name {
        "length" | "size" => Some(Value::Number(s.chars().count() as f64)),
        "upcase" => Some(Value::String(s.to_uppercase())),
        "downcase" => Some(Value::String(s.to_lowercase())),
        "strip" => Some(Value::String(s.trim().to_string())),
        "to_sym" => Some(Value::Symbol(s.to_string())),
        "empty?" => Some(Value::Bool(s.is_empty())),
        _ => None,
    }
}

fn key_name(key: &Value) -> Option<&str> {
    match key {
        Value::String(s) | Value::Symbol(s) => Some(s),
        _ => None,
    }
}

/// Resolve a numeric key against a sequence of `len` elements.
/// `Ok(None)` means in the right shape but out of range.
fn position(key: &Value, len: usize) -> LookupResult<Option<usize>> {
    match key {
        Value::Number(n) if is_integral(*n) => {
            let i = *n as i64;
            let resolved = if i < 0 { len as i64 + i } else { i };
            Ok((0..len as i64).contains(&resolved).then_some(resolved as usize))
        }
        other => Err(LookupError::TypeMismatch(format!(
            "positions are integers, got {}",
            other.inspect()
        ))),
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15
}

// ══════════════════════════════════════════════════════════════════════════════
// Canonical string form
// ══════════════════════════════════════════════════════════════════════════════

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if is_integral(*n) => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) | Self::Symbol(s) => f.write_str(s),
            Self::List(_) | Self::Record { .. } => f.write_str(&self.inspect()),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Conversions
// ══════════════════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Nil, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Self::Nil,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => n.as_f64().map_or(Self::Nil, Self::Number),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Self::Record {
                type_name: None,
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            },
        }
    }
}
