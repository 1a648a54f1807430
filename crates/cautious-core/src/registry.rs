//! Type-existence queries.
//!
//! A [`TypeRegistry`] answers "is there a type called `F::G`?". Names are
//! case-sensitive and may be qualified with `::`; registering a qualified
//! name also registers every enclosing namespace. A process-wide registry
//! backs the free functions [`class_exists`] and [`register_class`].

use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::{OnceLock, PoisonError, RwLock};
use thiserror::Error;

/// Type names every registry created with [`TypeRegistry::with_builtins`]
/// knows about: the dynamic value types.
pub const BUILTIN_TYPES: &[&str] = &[
    "Value", "Nil", "Bool", "Number", "String", "Symbol", "List", "Record",
];

/// Errors raised while populating a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The name is empty or has an empty `::` segment.
    #[error("invalid type name: {0:?}")]
    InvalidName(String),

    /// A JSON manifest could not be read.
    #[error("invalid registry manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// JSON manifest accepted by [`TypeRegistry::from_json`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    builtins: bool,
    #[serde(default)]
    types: Vec<String>,
}

/// A set of known type names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    names: BTreeSet<String>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with [`BUILTIN_TYPES`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for name in BUILTIN_TYPES {
            registry.names.insert((*name).to_string());
        }
        registry
    }

    /// Load a registry from a manifest such as
    /// `{"builtins": true, "types": ["A", "F::G"]}`.
    pub fn from_json(manifest: &str) -> Result<Self, RegistryError> {
        let manifest: Manifest = serde_json::from_str(manifest)?;
        let mut registry = if manifest.builtins {
            Self::with_builtins()
        } else {
            Self::new()
        };
        for name in &manifest.types {
            registry.register(name)?;
        }
        Ok(registry)
    }

    /// Register a possibly qualified name and all of its namespaces.
    pub fn register(&mut self, name: impl AsRef<str>) -> Result<(), RegistryError> {
        let name = name.as_ref();
        let segments = split_qualified(name)
            .ok_or_else(|| RegistryError::InvalidName(name.to_string()))?;
        let mut prefix = String::new();
        for segment in segments {
            if !prefix.is_empty() {
                prefix.push_str("::");
            }
            prefix.push_str(segment);
            if self.names.insert(prefix.clone()) {
                log::debug!("registered type name {prefix}");
            }
        }
        Ok(())
    }

    /// Register the Rust type `T` under its [`std::any::type_name`].
    ///
    /// Generic arguments are kept verbatim in the leaf name, so
    /// `Vec<u8>` and `Vec<i8>` are different entries.
    pub fn register_type<T: ?Sized>(&mut self) {
        let full = std::any::type_name::<T>();
        let path_end = full.find('<').unwrap_or(full.len());
        let (path, generics) = full.split_at(path_end);
        if let Some(segments) = split_qualified(path) {
            let mut prefix = String::new();
            for segment in segments {
                if !prefix.is_empty() {
                    prefix.push_str("::");
                }
                prefix.push_str(segment);
                self.names.insert(prefix.clone());
            }
        }
        if self.names.insert(format!("{path}{generics}")) {
            log::debug!("registered type name {full}");
        }
    }

    /// Whether `name` is known. Case-sensitive; a leading `::` is ignored.
    ///
    /// [`register`](TypeRegistry::register) rejects malformed names, so they
    /// are never known. Names from [`register_type`](TypeRegistry::register_type)
    /// match verbatim, generic arguments included.
    pub fn class_exists(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        let name = name.strip_prefix("::").unwrap_or(name);
        !name.is_empty() && self.names.contains(name)
    }

    /// Whether the Rust type `T` was registered with [`register_type`].
    ///
    /// [`register_type`]: TypeRegistry::register_type
    pub fn contains_type<T: ?Sized>(&self) -> bool {
        self.names.contains(std::any::type_name::<T>())
    }

    /// All known names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Split `A::B::C` into its segments; `None` if any segment is empty.
fn split_qualified(name: &str) -> Option<Vec<&str>> {
    let name = name.strip_prefix("::").unwrap_or(name);
    let segments: Vec<&str> = name.split("::").collect();
    segments
        .iter()
        .all(|s| !s.is_empty() && !s.contains(char::is_whitespace))
        .then_some(segments)
}

// ══════════════════════════════════════════════════════════════════════════════
// Process-wide registry
// ══════════════════════════════════════════════════════════════════════════════

static GLOBAL: OnceLock<RwLock<TypeRegistry>> = OnceLock::new();

/// The process-wide registry, created on first use with the builtins.
pub fn global() -> &'static RwLock<TypeRegistry> {
    GLOBAL.get_or_init(|| RwLock::new(TypeRegistry::with_builtins()))
}

/// Whether `name` is known to the process-wide registry.
pub fn class_exists(name: impl AsRef<str>) -> bool {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .class_exists(name)
}

/// Register `name` with the process-wide registry.
pub fn register_class(name: impl AsRef<str>) -> Result<(), RegistryError> {
    global()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rejects_empty_segments() {
        assert_eq!(split_qualified("A::B"), Some(vec!["A", "B"]));
        assert_eq!(split_qualified("::A"), Some(vec!["A"]));
        assert_eq!(split_qualified(""), None);
        assert_eq!(split_qualified("A::"), None);
        assert_eq!(split_qualified("A::::B"), None);
        assert_eq!(split_qualified("A B"), None);
    }
}
