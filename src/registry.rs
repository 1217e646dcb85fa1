//! Name lookup for datatypes.
//!
//! This module provides [`DatatypeRegistry`], a wrapper around [`IndexMap`] from names to
//! [`Datatype`]s. The standard registry knows each datatype under three spellings: its
//! local name (`decimal`), its prefixed name (`xsd:decimal`) and its full IRI.
//!
//! ## Examples
//!
//! ```rust
//! use xsd_literal::{Datatype, DatatypeRegistry};
//!
//! let registry = DatatypeRegistry::standard();
//! assert_eq!(registry.get("xsd:dateTime"), Some(Datatype::DateTime));
//! assert_eq!(registry.get("gYear"), None);
//!
//! // Registries can be extended with application-specific aliases.
//! let mut registry = registry.clone();
//! registry.insert("rdf:langString", Datatype::String);
//! assert_eq!(registry.get("rdf:langString"), Some(Datatype::String));
//! ```

use crate::Datatype;
use indexmap::IndexMap;
use std::sync::LazyLock;

static STANDARD: LazyLock<DatatypeRegistry> = LazyLock::new(|| {
    Datatype::ALL
        .into_iter()
        .flat_map(|datatype| {
            [
                (datatype.name().to_string(), datatype),
                (format!("xsd:{}", datatype.name()), datatype),
                (datatype.iri().to_string(), datatype),
            ]
        })
        .collect()
});

/// An insertion-ordered map from datatype names to datatypes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatatypeRegistry(IndexMap<String, Datatype>);

impl DatatypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        DatatypeRegistry(IndexMap::new())
    }

    /// The process-wide registry of built-in names.
    #[must_use]
    pub fn standard() -> &'static DatatypeRegistry {
        &STANDARD
    }

    /// Registers `name`, returning the datatype it previously named.
    pub fn insert(&mut self, name: impl Into<String>, datatype: Datatype) -> Option<Datatype> {
        self.0.insert(name.into(), datatype)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Datatype> {
        self.0.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the registered names in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Datatype> {
        self.0.iter()
    }

    /// Iterates over every name registered for `datatype`.
    pub fn names_of(&self, datatype: Datatype) -> impl Iterator<Item = &str> + '_ {
        self.0
            .iter()
            .filter(move |(_, registered)| **registered == datatype)
            .map(|(name, _)| name.as_str())
    }
}

impl Default for DatatypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for DatatypeRegistry {
    type Item = (String, Datatype);
    type IntoIter = indexmap::map::IntoIter<String, Datatype>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Datatype)> for DatatypeRegistry {
    fn from_iter<T: IntoIterator<Item = (String, Datatype)>>(iter: T) -> Self {
        DatatypeRegistry(IndexMap::from_iter(iter))
    }
}
