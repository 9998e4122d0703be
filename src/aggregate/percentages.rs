//! Cumulative percentages over keyed collections.
//!
//! ## Purpose
//!
//! This module derives a running-share view of an ordered keyed
//! collection: each output entry holds the sum of all values up to and
//! including its position, divided by the grand total.
//!
//! ## Key concepts
//!
//! * **Running share**: With all-present positive values the output is
//!   monotonically non-decreasing and the final entry is `1.0` up to
//!   floating-point rounding.
//! * **Absent values**: An absent value contributes to neither the
//!   running sum nor the grand total; its entry repeats the share of the
//!   previous position.
//!
//! ## Non-goals
//!
//! * This module does not sort or re-key the input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GridSpanError;
use crate::primitives::keyed::{KeyedValueList, KeyedValues};

// ============================================================================
// Cumulative Percentages
// ============================================================================

/// Compute cumulative percentages for an ordered keyed collection.
///
/// The output preserves the input's key order, with each value replaced
/// by the running sum through that entry divided by the total sum.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `data` is absent.
pub fn cumulative_percentages<K, T, V>(data: Option<&V>) -> Result<KeyedValueList<K, T>, GridSpanError>
where
    K: Clone + PartialEq,
    T: Float,
    V: KeyedValues<K, T>,
{
    let data = data.ok_or(GridSpanError::NullArgument { name: "data" })?;

    let mut total = T::zero();
    for index in 0..data.item_count() {
        if let Some(value) = data.value(index) {
            total = total + value;
        }
    }

    let mut result = KeyedValueList::new();
    let mut running = T::zero();
    for index in 0..data.item_count() {
        if let Some(value) = data.value(index) {
            running = running + value;
        }
        result.add_value(data.key(index).clone(), Some(running / total));
    }
    Ok(result)
}
