//! Structural comparison of rectangular grids.
//!
//! ## Purpose
//!
//! This module implements deep equality over grids of floats whose rows
//! may be absent, using IEEE-754 *representation* semantics rather than
//! arithmetic comparison.
//!
//! ## Design notes
//!
//! * **Representation equality**: NaN compares equal to NaN at the same
//!   position, `0.0` and `-0.0` are distinct, and infinities are equal
//!   only to the same signed infinity.
//! * **Short-circuit**: Any per-row or per-element mismatch returns
//!   `false` immediately.
//!
//! ## Key concepts
//!
//! * **Absent row**: A `None` row matches only another `None` row at the
//!   same index.
//! * **Absent grid**: An entirely absent grid (`None` argument) matches
//!   only another absent grid.
//!
//! ## Non-goals
//!
//! * This module does not order grids or compute distances between them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Grid Equality
// ============================================================================

/// Compare two grids for structural equality.
///
/// Two absent grids are equal; an absent grid never equals a present
/// one. Present grids are equal when their row counts match and every
/// row pair is either both absent or element-wise equal under
/// representation semantics.
pub fn equal<T: Float>(a: Option<&[Option<Vec<T>>]>, b: Option<&[Option<Vec<T>>]>) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };

    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b.iter()).all(|(ra, rb)| rows_equal(ra, rb))
}

fn rows_equal<T: Float>(a: &Option<Vec<T>>, b: &Option<Vec<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(&x, &y)| same_representation(x, y))
        }
        _ => false,
    }
}

// ============================================================================
// Element Comparison
// ============================================================================

/// Compare two floats by IEEE-754 representation.
///
/// All NaNs are treated as one value, zero signs are distinguished, and
/// every other value compares arithmetically.
#[inline]
pub fn same_representation<T: Float>(x: T, y: T) -> bool {
    if x.is_nan() || y.is_nan() {
        return x.is_nan() && y.is_nan();
    }
    if x == y {
        // Only the two zeros compare equal while differing in sign bit.
        return x != T::zero() || x.is_sign_positive() == y.is_sign_positive();
    }
    false
}
