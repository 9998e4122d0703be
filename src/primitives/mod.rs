//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by the rest of
//! the crate: the error type and the keyed-collection capability traits.
//! It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Span
//!   ↓
//! Layer 3: Aggregate
//!   ↓
//! Layer 2: Grid
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Ordered keyed value collections.
pub mod keyed;

/// Two-dimensional keyed tables.
pub mod table;
