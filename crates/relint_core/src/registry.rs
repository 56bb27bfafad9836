//! Name-keyed, immutable catalogs.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// Anything that can be stored in a [`Registry`].
pub trait Named {
    /// Unique name used as the registry key.
    fn name(&self) -> &str;
}

/// An immutable catalog of shared entries keyed by [`Named::name`].
///
/// The catalog is built once and never modified afterwards.
pub struct Registry<T: ?Sized + Named> {
    entries: BTreeMap<String, Arc<T>>,
}

impl<T: ?Sized + Named> Registry<T> {
    /// Builds a registry from a list of entries.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a name. Catalogs are assembled from static
    /// lists at startup, so a duplicate is a programming error.
    pub fn new(items: impl IntoIterator<Item = Arc<T>>) -> Self {
        let mut entries = BTreeMap::new();
        for item in items {
            let name = item.name().to_string();
            if entries.insert(name.clone(), item).is_some() {
                panic!("duplicate registry entry: {}", name);
            }
        }
        Self { entries }
    }

    /// Returns every registered name.
    pub fn names(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.entries.get(name).cloned()
    }

    /// Returns whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized + Named> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
