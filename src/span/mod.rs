//! Layer 4: Span
//!
//! # Purpose
//!
//! This layer provides the closed interval value type:
//! - [`range::Range`] with its bound, containment, intersection, and
//!   clamping queries
//! - Pure transforms that derive new ranges (combine, expand, shift,
//!   scale)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Span ← You are here
//!   ↓
//! Layer 3: Aggregate
//!   ↓
//! Layer 2: Grid
//!   ↓
//! Layer 1: Primitives
//! ```

/// The closed interval type and its queries.
pub mod range;

/// Range-producing transforms.
pub mod transform;
