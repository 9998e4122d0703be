//! Cloning and cell conversion for rectangular grids.
//!
//! ## Purpose
//!
//! This module copies grids and lifts primitive float rows into the
//! nullable cell representation used by the keyed containers.
//!
//! ## Design notes
//!
//! * **Full isolation**: [`deep_clone`] allocates a fresh outer
//!   container and a fresh container per present row; no storage is
//!   shared with the source at any level.
//! * **Structure preservation**: Absent rows stay absent and zero-length
//!   rows stay zero-length; conversion never reorders or drops elements.
//!
//! ## Non-goals
//!
//! * This module does not validate row-length uniformity; ragged grids
//!   are first-class inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::GridSpanError;

// ============================================================================
// Deep Clone
// ============================================================================

/// Produce a fully independent copy of a grid.
///
/// Mutating either the source or the copy is never observable in the
/// other.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `source` is absent.
pub fn deep_clone<T: Float>(
    source: Option<&[Option<Vec<T>>]>,
) -> Result<Vec<Option<Vec<T>>>, GridSpanError> {
    let source = source.ok_or(GridSpanError::NullArgument { name: "source" })?;

    // Cloning each row's Vec duplicates its storage, so the copy is
    // independent at the outer and the row level.
    Ok(source.to_vec())
}

// ============================================================================
// Cell Conversion
// ============================================================================

/// Convert a flat sequence of primitives into nullable cells.
///
/// The result has one `Some` cell per input element, order preserved.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `data` is absent.
pub fn to_cells<T: Float>(data: Option<&[T]>) -> Result<Vec<Option<T>>, GridSpanError> {
    let data = data.ok_or(GridSpanError::NullArgument { name: "data" })?;

    Ok(data.iter().map(|&v| Some(v)).collect())
}

/// Convert a rectangular array of primitives into nullable cell rows.
///
/// Row count and per-row element counts are preserved; an empty input
/// yields an empty output.
///
/// # Errors
///
/// Returns [`GridSpanError::NullArgument`] when `data` is absent.
pub fn to_cell_grid<T: Float>(
    data: Option<&[Vec<T>]>,
) -> Result<Vec<Vec<Option<T>>>, GridSpanError> {
    let data = data.ok_or(GridSpanError::NullArgument { name: "data" })?;

    Ok(data
        .iter()
        .map(|row| row.iter().map(|&v| Some(v)).collect())
        .collect())
}
