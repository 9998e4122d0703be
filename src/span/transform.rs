//! Range-producing transforms.
//!
//! ## Purpose
//!
//! This module implements the operations that derive a new [`Range`]
//! from existing ones: combining two ranges, expanding by margins or to
//! include a value, shifting, and scaling.
//!
//! ## Design notes
//!
//! * **Purity**: Every transform returns a fresh value; no operation
//!   mutates its input.
//! * **Absence**: Transforms that accept an absent range take
//!   `Option<&Range<T>>`. Where absence has a defined meaning (combine,
//!   expand-to-include) it is handled; where it does not (expand, shift,
//!   scale) it is a [`GridSpanError::NullArgument`].
//! * **NaN-tolerant combining**: [`Range::combine_ignoring_nan`] drops
//!   NaN bounds from the min/max and treats a full NaN range as absent.
//!
//! ## Key concepts
//!
//! * **Zero-crossing pin**: Shifting without zero crossing pins any
//!   bound whose sign would flip at exactly `0.0`; a bound already at
//!   zero shifts freely.
//!
//! ## Non-goals
//!
//! * This module does not validate that a transform preserves
//!   `lower <= upper`; inverted inputs are treated as plain bound pairs.

// External dependencies
use num_traits::{Float, ToPrimitive};

// Internal dependencies
use crate::primitives::errors::GridSpanError;
use crate::span::range::Range;

impl<T: Float> Range<T> {
    // ========================================================================
    // Combining
    // ========================================================================

    /// Combine two possibly absent ranges into their bounding range.
    ///
    /// Both absent yields absent; one absent yields the other; otherwise
    /// the result spans `min(lowers)` to `max(uppers)`, with inverted
    /// inputs treated as plain bound pairs.
    pub fn combine(a: Option<&Self>, b: Option<&Self>) -> Option<Self> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(*a),
            (None, Some(b)) => Some(*b),
            (Some(a), Some(b)) => Some(Self::new(
                a.lower_bound().min(b.lower_bound()),
                a.upper_bound().max(b.upper_bound()),
            )),
        }
    }

    /// Combine two possibly absent ranges, letting NaN bounds drop out.
    ///
    /// A full NaN range counts as absent. The result is `None` only when
    /// no bound contributes: both inputs absent, both NaN ranges, or one
    /// of each.
    pub fn combine_ignoring_nan(a: Option<&Self>, b: Option<&Self>) -> Option<Self> {
        let (a, b) = match (a, b) {
            (None, None) => return None,
            (Some(a), None) => return (!a.is_nan_range()).then_some(*a),
            (None, Some(b)) => return (!b.is_nan_range()).then_some(*b),
            (Some(a), Some(b)) => (a, b),
        };

        // Float::min / Float::max already ignore a NaN operand.
        let lower = a.lower_bound().min(b.lower_bound());
        let upper = a.upper_bound().max(b.upper_bound());
        if lower.is_nan() && upper.is_nan() {
            return None;
        }
        Some(Self::new(lower, upper))
    }

    // ========================================================================
    // Expansion
    // ========================================================================

    /// Grow a range by margins proportional to its length.
    ///
    /// The lower bound decreases by `lower_margin * length` and the
    /// upper bound increases by `upper_margin * length`. Margins may be
    /// negative; if they invert the bounds, both collapse to the
    /// midpoint of the crossed pair.
    ///
    /// # Errors
    ///
    /// Returns [`GridSpanError::NullArgument`] when `range` is absent.
    pub fn expand(
        range: Option<&Self>,
        lower_margin: T,
        upper_margin: T,
    ) -> Result<Self, GridSpanError> {
        let range = range.ok_or(GridSpanError::NullArgument { name: "range" })?;

        let length = range.length();
        let mut lower = range.lower_bound() - length * lower_margin;
        let mut upper = range.upper_bound() + length * upper_margin;
        if lower > upper {
            let two = T::one() + T::one();
            lower = lower / two + upper / two;
            upper = lower;
        }
        Ok(Self::new(lower, upper))
    }

    /// Extend a possibly absent range to include `value`.
    ///
    /// An absent range yields the degenerate range `[value, value]`; a
    /// NaN value yields the NaN range; otherwise the result spans
    /// `min(lower, value)` to `max(upper, value)`.
    pub fn expand_to_include(range: Option<&Self>, value: T) -> Self {
        let range = match range {
            None => return Self::new(value, value),
            Some(range) => range,
        };

        if value.is_nan() {
            return Self::new(T::nan(), T::nan());
        }
        Self::new(
            range.lower_bound().min(value),
            range.upper_bound().max(value),
        )
    }

    // ========================================================================
    // Shifting
    // ========================================================================

    /// Shift both bounds by `delta` without crossing zero.
    ///
    /// Equivalent to [`Range::shift_with_zero_crossing`] with crossing
    /// disallowed.
    ///
    /// # Errors
    ///
    /// Returns [`GridSpanError::NullArgument`] when `base` is absent.
    pub fn shift(base: Option<&Self>, delta: T) -> Result<Self, GridSpanError> {
        Self::shift_with_zero_crossing(base, delta, false)
    }

    /// Shift both bounds by `delta`.
    ///
    /// With `allow_zero_crossing` a bound moves freely. Without it a
    /// bound whose sign would flip is pinned at exactly `0.0`; a bound
    /// already at zero moves freely in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`GridSpanError::NullArgument`] when `base` is absent.
    pub fn shift_with_zero_crossing(
        base: Option<&Self>,
        delta: T,
        allow_zero_crossing: bool,
    ) -> Result<Self, GridSpanError> {
        let base = base.ok_or(GridSpanError::NullArgument { name: "base" })?;

        if allow_zero_crossing {
            return Ok(Self::new(base.lower_bound() + delta, base.upper_bound() + delta));
        }
        Ok(Self::new(
            shift_keeping_sign(base.lower_bound(), delta),
            shift_keeping_sign(base.upper_bound(), delta),
        ))
    }

    // ========================================================================
    // Scaling
    // ========================================================================

    /// Multiply both bounds by a non-negative `factor`.
    ///
    /// A factor of zero collapses the range to `[0.0, 0.0]`.
    ///
    /// # Errors
    ///
    /// Returns [`GridSpanError::NullArgument`] when `base` is absent and
    /// [`GridSpanError::NegativeScaleFactor`] when `factor < 0`.
    pub fn scale(base: Option<&Self>, factor: T) -> Result<Self, GridSpanError> {
        let base = base.ok_or(GridSpanError::NullArgument { name: "base" })?;
        if factor < T::zero() {
            return Err(GridSpanError::NegativeScaleFactor(
                factor.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(Self::new(base.lower_bound() * factor, base.upper_bound() * factor))
    }
}

// ============================================================================
// Shift Helper
// ============================================================================

// Shift a single bound, pinning at 0.0 when the shift would flip its sign.
#[inline]
fn shift_keeping_sign<T: Float>(value: T, delta: T) -> T {
    if value > T::zero() {
        (value + delta).max(T::zero())
    } else if value < T::zero() {
        (value + delta).min(T::zero())
    } else {
        value + delta
    }
}
