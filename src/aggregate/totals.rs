//! Row and column totals over two-dimensional tables.
//!
//! ## Purpose
//!
//! This module sums one axis of a [`Table`], either across the full
//! orthogonal axis or restricted to an explicit set of valid indices.
//!
//! ## Design notes
//!
//! * **Silent degradation**: Absent cells contribute nothing to a total
//!   (they are excluded, not zero-substituted), and indices outside the
//!   table's current bounds are skipped rather than rejected.
//! * **Fail fast**: An absent table is an error regardless of the index
//!   set supplied.
//!
//! ## Non-goals
//!
//! * This module does not aggregate across both axes at once.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GridSpanError;
use crate::primitives::table::Table;

// ============================================================================
// Column Totals
// ============================================================================

/// Sum every present cell in `column`.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `table` is absent.
pub fn column_total<T, V>(table: Option<&V>, column: usize) -> Result<T, GridSpanError>
where
    T: Float,
    V: Table<T> + ?Sized,
{
    let table = table.ok_or(GridSpanError::NullArgument { name: "table" })?;

    let mut total = T::zero();
    for row in 0..table.row_count() {
        if let Some(value) = table.value(row, column) {
            total = total + value;
        }
    }
    Ok(total)
}

/// Sum the present cells in `column` whose row index appears in
/// `valid_rows`.
///
/// Row indices at or beyond the current row count are skipped.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `table` is absent.
pub fn column_total_for_rows<T, V>(
    table: Option<&V>,
    column: usize,
    valid_rows: &[usize],
) -> Result<T, GridSpanError>
where
    T: Float,
    V: Table<T> + ?Sized,
{
    let table = table.ok_or(GridSpanError::NullArgument { name: "table" })?;

    let row_count = table.row_count();
    let mut total = T::zero();
    for &row in valid_rows {
        if row < row_count {
            if let Some(value) = table.value(row, column) {
                total = total + value;
            }
        }
    }
    Ok(total)
}

// ============================================================================
// Row Totals
// ============================================================================

/// Sum every present cell in `row`.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `table` is absent.
pub fn row_total<T, V>(table: Option<&V>, row: usize) -> Result<T, GridSpanError>
where
    T: Float,
    V: Table<T> + ?Sized,
{
    let table = table.ok_or(GridSpanError::NullArgument { name: "table" })?;

    let mut total = T::zero();
    for column in 0..table.column_count() {
        if let Some(value) = table.value(row, column) {
            total = total + value;
        }
    }
    Ok(total)
}

/// Sum the present cells in `row` whose column index appears in
/// `valid_columns`.
///
/// Column indices at or beyond the current column count are skipped.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `table` is absent.
pub fn row_total_for_columns<T, V>(
    table: Option<&V>,
    row: usize,
    valid_columns: &[usize],
) -> Result<T, GridSpanError>
where
    T: Float,
    V: Table<T> + ?Sized,
{
    let table = table.ok_or(GridSpanError::NullArgument { name: "table" })?;

    let column_count = table.column_count();
    let mut total = T::zero();
    for &column in valid_columns {
        if column < column_count {
            if let Some(value) = table.value(row, column) {
                total = total + value;
            }
        }
    }
    Ok(total)
}
