#![cfg(feature = "dev")]
//! Tests for cumulative percentage computation.
//!
//! These tests verify that cumulative percentages:
//! - Preserve the input's key order
//! - Reach exactly 1.0 at the final entry
//! - Exclude absent values from both sums
//! - Reject an absent collection
//!
//! ## Test Organization
//!
//! 1. **Running Share** - Value progression and the final 1.0
//! 2. **Key Preservation** - Output keys match input keys in order
//! 3. **Absence Handling** - Absent values and absent input

use approx::assert_relative_eq;

use gridspan::internals::aggregate::percentages::cumulative_percentages;
use gridspan::internals::primitives::errors::GridSpanError;
use gridspan::internals::primitives::keyed::{KeyedValueList, KeyedValues};

fn series(entries: &[(&'static str, Option<f64>)]) -> KeyedValueList<&'static str, f64> {
    let mut data = KeyedValueList::new();
    for &(key, value) in entries {
        data.add_value(key, value);
    }
    data
}

// ============================================================================
// Running Share Tests
// ============================================================================

/// Test the running share over three entries.
#[test]
fn test_three_entry_progression() {
    let data = series(&[("A", Some(5.0)), ("B", Some(3.0)), ("C", Some(2.0))]);
    let result = cumulative_percentages(Some(&data)).unwrap();

    assert_relative_eq!(result.get_value(&"A").unwrap(), 0.5);
    assert_relative_eq!(result.get_value(&"B").unwrap(), 0.8);
    assert_relative_eq!(result.get_value(&"C").unwrap(), 1.0);
}

/// Test that the final entry is 1.0 for a two-entry collection.
#[test]
fn test_final_entry_is_one() {
    let data = series(&[("X", Some(4.0)), ("Y", Some(1.0))]);
    let result = cumulative_percentages(Some(&data)).unwrap();

    assert_relative_eq!(result.get_value(&"X").unwrap(), 0.8);
    assert_relative_eq!(result.get_value(&"Y").unwrap(), 1.0);
}

/// Test shares when the larger value comes second.
#[test]
fn test_increasing_values() {
    let data = series(&[("A", Some(10.0)), ("B", Some(20.0))]);
    let result = cumulative_percentages(Some(&data)).unwrap();

    assert_relative_eq!(result.get_value(&"A").unwrap(), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(result.get_value(&"B").unwrap(), 1.0);
}

/// Test a single-entry collection.
#[test]
fn test_single_entry() {
    let data = series(&[("only", Some(42.0))]);
    let result = cumulative_percentages(Some(&data)).unwrap();

    assert_eq!(result.item_count(), 1);
    assert_relative_eq!(result.get_value(&"only").unwrap(), 1.0);
}

// ============================================================================
// Key Preservation Tests
// ============================================================================

/// Test that output keys match input keys in order.
#[test]
fn test_key_order_preserved() {
    let data = series(&[("B", Some(1.0)), ("A", Some(1.0)), ("C", Some(2.0))]);
    let result = cumulative_percentages(Some(&data)).unwrap();

    assert_eq!(result.item_count(), 3);
    assert_eq!(*result.key(0), "B");
    assert_eq!(*result.key(1), "A");
    assert_eq!(*result.key(2), "C");
}

// ============================================================================
// Absence Handling Tests
// ============================================================================

/// Test that an absent collection is rejected.
#[test]
fn test_absent_collection() {
    let data: Option<&KeyedValueList<&str, f64>> = None;
    assert_eq!(
        cumulative_percentages(data),
        Err(GridSpanError::NullArgument { name: "data" })
    );
}

/// Test that absent values are excluded from both sums.
///
/// The absent entry repeats the share of the previous position and the
/// final entry still reaches 1.0.
#[test]
fn test_absent_values_excluded() {
    let data = series(&[("A", Some(2.0)), ("B", None), ("C", Some(2.0))]);
    let result = cumulative_percentages(Some(&data)).unwrap();

    assert_relative_eq!(result.get_value(&"A").unwrap(), 0.5);
    assert_relative_eq!(result.get_value(&"B").unwrap(), 0.5);
    assert_relative_eq!(result.get_value(&"C").unwrap(), 1.0);
}
