//! The closed interval value type.
//!
//! ## Purpose
//!
//! This module defines [`Range`], an immutable closed interval
//! `[lower, upper]`, together with its query operations: bound access,
//! central value, length, containment, intersection, and clamping.
//!
//! ## Design notes
//!
//! * **Value semantics**: A range is a plain `Copy` pair of bounds;
//!   every transform in [`transform`](crate::span::transform) builds a
//!   new value and never mutates an existing one.
//! * **Unvalidated bounds**: The constructor stores the bounds verbatim.
//!   `lower > upper` and NaN bounds are representable; the combining and
//!   clamping logic is written to tolerate them.
//! * **NaN range**: A range with *both* bounds NaN marks the absence of
//!   any data; a single NaN bound does not.
//!
//! ## Key concepts
//!
//! * **Containment** follows IEEE comparison rules, so `contains(NaN)`
//!   is always `false`.
//! * **Intersection** uses an asymmetric boundary policy: a candidate
//!   starting at or below the lower bound must reach *strictly past* it,
//!   while a candidate starting inside must begin *strictly before* the
//!   upper bound. A zero-width candidate sitting exactly on the upper
//!   bound therefore does not intersect.
//!
//! ## Non-goals
//!
//! * This module does not represent open or half-open intervals.
//! * This module does not define a total order over ranges.

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use num_traits::{Float, ToPrimitive};

// ============================================================================
// Range Type
// ============================================================================

/// An immutable closed interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    lower: T,
    upper: T,
}

impl<T: Float> Range<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a range from its bounds, stored verbatim.
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    // ========================================================================
    // Bound Queries
    // ========================================================================

    /// The lower bound, exactly as constructed.
    #[inline]
    pub fn lower_bound(&self) -> T {
        self.lower
    }

    /// The upper bound, exactly as constructed.
    #[inline]
    pub fn upper_bound(&self) -> T {
        self.upper
    }

    /// The midpoint `(lower + upper) / 2` in plain IEEE arithmetic.
    #[inline]
    pub fn central_value(&self) -> T {
        (self.lower + self.upper) / (T::one() + T::one())
    }

    /// The extent `upper - lower`.
    #[inline]
    pub fn length(&self) -> T {
        self.upper - self.lower
    }

    // ========================================================================
    // Membership Queries
    // ========================================================================

    /// Whether `value` lies in `[lower, upper]`.
    ///
    /// NaN is never contained, and an infinity is contained only when it
    /// equals an infinite bound.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Whether the candidate interval `[b0, b1]` overlaps this range.
    ///
    /// A NaN candidate bound or a reversed candidate never intersects.
    /// The boundary policy is asymmetric: touching the lower bound from
    /// outside counts only with positive reach past it, and a zero-width
    /// candidate exactly on the upper bound is excluded.
    pub fn intersects(&self, b0: T, b1: T) -> bool {
        if b0 <= self.lower {
            b1 > self.lower
        } else {
            b0 < self.upper && b1 >= b0
        }
    }

    /// Clamp `value` into `[lower, upper]`.
    ///
    /// NaN propagates unchanged rather than being clamped.
    pub fn constrain(&self, value: T) -> T {
        if self.contains(value) {
            return value;
        }
        if value > self.upper {
            self.upper
        } else if value < self.lower {
            self.lower
        } else {
            value
        }
    }

    /// Whether both bounds are NaN.
    ///
    /// A range with exactly one NaN bound is not a NaN range.
    #[inline]
    pub fn is_nan_range(&self) -> bool {
        self.lower.is_nan() && self.upper.is_nan()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Debug> Display for Range<T> {
    /// Render as `Range[<lower>,<upper>]` with the natural decimal form
    /// of each bound, e.g. `Range[-1.0,1.0]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Range[{:?},{:?}]", self.lower, self.upper)
    }
}

// ============================================================================
// Hash Implementation
// ============================================================================

impl<T: Float> Hash for Range<T> {
    /// Hash the IEEE representation of each bound, so equal ranges hash
    /// equally and distinct bound patterns stay distinguishable.
    fn hash<H: Hasher>(&self, state: &mut H) {
        representation_bits(self.lower).hash(state);
        representation_bits(self.upper).hash(state);
    }
}

#[inline]
fn representation_bits<T: Float>(value: T) -> u64 {
    // All NaNs collapse to one pattern, matching the equality used by
    // grid comparison.
    if value.is_nan() {
        return f64::NAN.to_bits();
    }
    value.to_f64().map(f64::to_bits).unwrap_or(0)
}
