#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types,
//! traits, and functions for convenient usage of the crate. The prelude
//! should provide a one-stop import for common gridspan functionality.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **End-to-End Usage** - Complete workflows work with prelude imports

use approx::assert_relative_eq;

use gridspan::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
#[test]
fn test_prelude_imports() {
    // Grid functions
    let grid = vec![Some(vec![1.0, 2.0]), None];
    let cloned = deep_clone(Some(grid.as_slice())).unwrap();
    assert!(equal(Some(grid.as_slice()), Some(cloned.as_slice())));

    let cells = to_cells(Some(&[1.0, 2.0][..])).unwrap();
    assert_eq!(cells.len(), 2);
    let cell_grid = to_cell_grid(Some(&[vec![1.0]][..])).unwrap();
    assert_eq!(cell_grid.len(), 1);

    // Range type and error type
    let range = Range::new(-1.0, 1.0);
    assert!(range.contains(0.0));
    let err: GridSpanError = Range::<f64>::shift(None, 1.0).unwrap_err();
    assert_eq!(err, GridSpanError::NullArgument { name: "base" });
}

// ============================================================================
// End-to-End Usage Tests
// ============================================================================

/// Test a table workflow through the prelude.
#[test]
fn test_prelude_table_workflow() {
    let mut table: KeyedTable<&str, &str, f64> = KeyedTable::new();
    table.add_value(Some(1.0), "Row1", "Col1");
    table.add_value(None, "Row1", "Col2");
    table.add_value(Some(3.0), "Row1", "Col3");

    assert_relative_eq!(row_total(Some(&table), 0).unwrap(), 4.0);
    assert_relative_eq!(
        row_total_for_columns(Some(&table), 0, &[0, 2]).unwrap(),
        4.0
    );
    assert_relative_eq!(column_total(Some(&table), 2).unwrap(), 3.0);
    assert_relative_eq!(column_total_for_rows(Some(&table), 2, &[0]).unwrap(), 3.0);
}

/// Test a keyed-collection workflow through the prelude.
#[test]
fn test_prelude_percentages_workflow() {
    let mut data: KeyedValueList<&str, f64> = KeyedValueList::new();
    data.add_value("A", Some(5.0));
    data.add_value("B", Some(3.0));
    data.add_value("C", Some(2.0));

    let result = cumulative_percentages(Some(&data)).unwrap();
    assert_eq!(result.item_count(), 3);
    assert_relative_eq!(result.get_value(&"C").unwrap(), 1.0);
}

/// Test a range pipeline through the prelude.
#[test]
fn test_prelude_range_workflow() -> Result<(), GridSpanError> {
    let base = Range::combine(Some(&Range::new(1.0, 10.0)), Some(&Range::new(15.0, 20.0)))
        .expect("two present ranges always combine");
    assert_eq!(base, Range::new(1.0, 20.0));

    let expanded = Range::expand(Some(&base), 0.0, 0.0)?;
    let shifted = Range::shift_with_zero_crossing(Some(&expanded), 1.0, true)?;
    let scaled = Range::scale(Some(&shifted), 2.0)?;

    assert_eq!(scaled, Range::new(4.0, 42.0));
    Ok(())
}
