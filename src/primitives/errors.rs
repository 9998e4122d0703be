//! Error types for gridspan operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions shared by the grid,
//! aggregate, and span layers: absent required arguments and invalid
//! transform parameters.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the offending argument so call sites
//!   stay diagnosable without backtraces.
//! * **Fail fast**: Every error is raised synchronously before any work
//!   is performed; there is no partial output to clean up.
//! * **No-std**: Supports `no_std` environments; only `core::fmt` is
//!   required for rendering.
//!
//! ## Key concepts
//!
//! 1. **Absent arguments**: A `None` where a value is required (a `None`
//!    grid, table, collection, or range).
//! 2. **Invalid parameters**: A transform parameter outside its domain
//!    (a negative scale factor).
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for gridspan operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridSpanError {
    /// A required argument was absent.
    NullArgument {
        /// Name of the absent argument.
        name: &'static str,
    },

    /// Scale factors must be non-negative.
    NegativeScaleFactor(f64),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for GridSpanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NullArgument { name } => {
                write!(f, "Null '{name}' argument is not permitted")
            }
            Self::NegativeScaleFactor(factor) => {
                write!(f, "Negative scale factor: {factor} (must be >= 0)")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for GridSpanError {}
