//! Layer 2: Grid
//!
//! # Purpose
//!
//! This layer provides pure functions over rectangular arrays of floats
//! in which individual rows may be absent:
//! - Structural comparison with IEEE-754 representation semantics
//! - Deep cloning with full isolation between source and copy
//! - Conversion of primitive rows into nullable cell rows
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Span
//!   ↓
//! Layer 3: Aggregate
//!   ↓
//! Layer 2: Grid ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Structural grid comparison.
pub mod compare;

/// Cloning and cell conversion.
pub mod convert;
