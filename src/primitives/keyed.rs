//! Ordered keyed value collections.
//!
//! ## Purpose
//!
//! This module defines the keyed-collection capability used by the
//! aggregate layer: an ordered sequence of `(key, value)` entries,
//! addressable by index, whose values may be absent.
//!
//! ## Design notes
//!
//! * **Capability trait**: Consumers depend on [`KeyedValues`] rather
//!   than a concrete container, so any ordered-map-like structure can
//!   back it.
//! * **Absent values**: A cell holds `Option<T>`; an absent value is a
//!   first-class state, not an error.
//!
//! ## Invariants
//!
//! * Entries preserve insertion order.
//! * Keys are unique within a collection; re-adding a key replaces its
//!   value in place.
//!
//! ## Non-goals
//!
//! * This module does not aggregate or transform values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Capability Trait
// ============================================================================

/// An ordered collection of keyed, possibly absent numeric values.
pub trait KeyedValues<K, T: Float> {
    /// Number of entries in the collection.
    fn item_count(&self) -> usize;

    /// Key of the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= item_count()`.
    fn key(&self, index: usize) -> &K;

    /// Value of the entry at `index`, or `None` if the value is absent
    /// or the index is out of bounds.
    fn value(&self, index: usize) -> Option<T>;
}

// ============================================================================
// Default Implementation
// ============================================================================

/// Insertion-ordered list-backed implementation of [`KeyedValues`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyedValueList<K, T> {
    entries: Vec<(K, Option<T>)>,
}

impl<K: PartialEq, T: Float> KeyedValueList<K, T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a value for `key`, replacing the stored value if the key is
    /// already present and appending a new entry otherwise.
    pub fn add_value(&mut self, key: K, value: Option<T>) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a value by key.
    ///
    /// Returns `None` both for an unknown key and for a key whose value
    /// is absent.
    pub fn get_value(&self, key: &K) -> Option<T> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| *v)
    }

    /// Check if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, T: Float> KeyedValues<K, T> for KeyedValueList<K, T> {
    fn item_count(&self) -> usize {
        self.entries.len()
    }

    fn key(&self, index: usize) -> &K {
        &self.entries[index].0
    }

    fn value(&self, index: usize) -> Option<T> {
        self.entries.get(index).and_then(|(_, v)| *v)
    }
}
