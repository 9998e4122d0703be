//! Two-dimensional keyed tables.
//!
//! ## Purpose
//!
//! This module defines the two-dimensional table capability used by the
//! aggregate layer: a rectangular arrangement of possibly absent cells
//! addressed by `(row, column)` index, with keyed rows and columns in
//! the default implementation.
//!
//! ## Design notes
//!
//! * **Capability trait**: Totals depend on [`Table`] rather than a
//!   concrete storage layout.
//! * **Silent degradation**: Addressing outside the current bounds
//!   yields `None` rather than a panic; aggregation skips such cells.
//!
//! ## Invariants
//!
//! * Row and column keys preserve first-insertion order.
//! * Every stored row has one slot per known column.
//!
//! ## Non-goals
//!
//! * This module does not compute totals or percentages.

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

/// A two-dimensional arrangement of possibly absent numeric values.
pub trait Table<T: Float> {
    /// Number of rows in the table.
    fn row_count(&self) -> usize;

    /// Number of columns in the table.
    fn column_count(&self) -> usize;

    /// Value of the cell at `(row, column)`, or `None` if the cell is
    /// absent or the position lies outside the current bounds.
    fn value(&self, row: usize, column: usize) -> Option<T>;
}

// ============================================================================
// Default Implementation
// ============================================================================

/// Row-major keyed implementation of [`Table`].
///
/// Rows and columns are created on first use; cells never written stay
/// absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyedTable<R, C, T> {
    row_keys: Vec<R>,
    column_keys: Vec<C>,
    rows: Vec<Vec<Option<T>>>,
}

impl<R: PartialEq, C: PartialEq, T: Float> KeyedTable<R, C, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            row_keys: Vec::new(),
            column_keys: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Store `value` at the cell addressed by `(row_key, column_key)`,
    /// growing the key sets on demand.
    pub fn add_value(&mut self, value: Option<T>, row_key: R, column_key: C) {
        let row = self.row_index_or_insert(row_key);
        let column = self.column_index_or_insert(column_key);
        self.rows[row][column] = value;
    }

    /// Key of the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= row_count()`.
    pub fn row_key(&self, index: usize) -> &R {
        &self.row_keys[index]
    }

    /// Key of the column at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= column_count()`.
    pub fn column_key(&self, index: usize) -> &C {
        &self.column_keys[index]
    }

    fn row_index_or_insert(&mut self, key: R) -> usize {
        match self.row_keys.iter().position(|k| *k == key) {
            Some(index) => index,
            None => {
                self.row_keys.push(key);
                self.rows.push(vec![None; self.column_keys.len()]);
                self.row_keys.len() - 1
            }
        }
    }

    fn column_index_or_insert(&mut self, key: C) -> usize {
        match self.column_keys.iter().position(|k| *k == key) {
            Some(index) => index,
            None => {
                self.column_keys.push(key);
                for row in &mut self.rows {
                    row.push(None);
                }
                self.column_keys.len() - 1
            }
        }
    }
}

impl<R, C, T: Float> Table<T> for KeyedTable<R, C, T> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.column_keys.len()
    }

    fn value(&self, row: usize, column: usize) -> Option<T> {
        self.rows.get(row).and_then(|r| r.get(column)).and_then(|v| *v)
    }
}
