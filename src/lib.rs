//! # gridspan — grid utilities and closed numeric intervals
//!
//! A small, pure numeric utility library with two independent components:
//!
//! * **Grid and table utilities** — structural comparison, deep cloning,
//!   and cell conversion over rectangular arrays of floats (rows may be
//!   absent), plus axis totals and cumulative percentages over keyed
//!   tables and keyed value collections.
//! * **[`Range`](prelude::Range)** — an immutable closed interval
//!   `[lower, upper]` with containment, intersection, clamping, and a
//!   family of pure transforms (combine, expand, shift, scale).
//!
//! All numeric code is generic over [`num_traits::Float`], so `f32` and
//! `f64` are both supported.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridspan::prelude::*;
//!
//! let a = vec![Some(vec![1.0, 2.0]), None];
//! let b = deep_clone(Some(a.as_slice()))?;
//! assert!(equal(Some(a.as_slice()), Some(b.as_slice())));
//!
//! let r = Range::new(-1.0, 1.0);
//! assert_eq!(r.central_value(), 0.0);
//! assert_eq!(r.to_string(), "Range[-1.0,1.0]");
//!
//! let shifted = Range::shift(Some(&Range::new(1.0, 3.0)), -5.0)?;
//! assert_eq!(shifted, Range::new(0.0, 0.0));
//! # Result::<(), GridSpanError>::Ok(())
//! ```
//!
//! ## Null modelling
//!
//! The contracts distinguish *absent* data from *empty* data at three
//! levels, and each maps to an explicit `Option`:
//!
//! * an absent argument is `Option<&...>` at the call boundary,
//! * an absent row inside a grid is `Option<Vec<T>>`,
//! * an absent cell inside a table is `Option<T>`.
//!
//! Operations that reject absent arguments return
//! [`GridSpanError::NullArgument`](prelude::GridSpanError); absent rows
//! and cells are ordinary values that compare, clone, and aggregate by
//! their own rules (see the module docs).
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, GridSpanError>` and compose
//! with the `?` operator:
//!
//! ```rust
//! use gridspan::prelude::*;
//!
//! let scaled = Range::scale(Some(&Range::new(-2.0, 2.0)), 2.0)?;
//! assert_eq!(scaled.to_string(), "Range[-4.0,4.0]");
//! # Result::<(), GridSpanError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! gridspan = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error type and table capability traits.
mod primitives;

// Layer 2: Grid - rectangular-array comparison, cloning, and conversion.
mod grid;

// Layer 3: Aggregate - axis totals and cumulative percentages.
mod aggregate;

// Layer 4: Span - the closed interval value type and its transforms.
mod span;

// Standard gridspan prelude.
pub mod prelude {
    pub use crate::aggregate::percentages::cumulative_percentages;
    pub use crate::aggregate::totals::{
        column_total, column_total_for_rows, row_total, row_total_for_columns,
    };
    pub use crate::grid::compare::equal;
    pub use crate::grid::convert::{deep_clone, to_cell_grid, to_cells};
    pub use crate::primitives::errors::GridSpanError;
    pub use crate::primitives::keyed::{KeyedValueList, KeyedValues};
    pub use crate::primitives::table::{KeyedTable, Table};
    pub use crate::span::range::Range;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod grid {
        pub use crate::grid::*;
    }
    pub mod aggregate {
        pub use crate::aggregate::*;
    }
    pub mod span {
        pub use crate::span::*;
    }
}
