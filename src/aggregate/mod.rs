//! Layer 3: Aggregate
//!
//! # Purpose
//!
//! This layer reduces keyed containers to derived values:
//! - Row and column totals over two-dimensional tables
//! - Cumulative percentages over ordered keyed collections
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Span
//!   ↓
//! Layer 3: Aggregate ← You are here
//!   ↓
//! Layer 2: Grid
//!   ↓
//! Layer 1: Primitives
//! ```

/// Axis totals over tables.
pub mod totals;

/// Cumulative percentage computation.
pub mod percentages;
