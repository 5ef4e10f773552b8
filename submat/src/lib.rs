//! Submat - Dense Matrix Sub-Indexing and Sub-Matrix Mutation
//!
//! This library resolves row/column selection expressions against dense
//! column-major matrices and performs bounds-checked extraction, scalar
//! broadcast, and in-place block replacement.
//!
//! ## Architecture
//!
//! Submat follows a clean specification/implementation separation:
//!
//! - **submat-core**: Selector model, normalization, materialization, and
//!   pure validation (no I/O, `no_std`)
//! - **submat**: Concrete column-major storage and the extraction and
//!   mutation engines
//!
//! ## Quick Start
//!
//! ```rust
//! use submat::{get_submatrix, AxisSelector, Matrix, Selector};
//!
//! fn example() -> submat::Result<()> {
//!     // Columns [1,2,3] and [4,5,6]
//!     let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2)?;
//!
//!     // Rows 2..3 of column 1, as written M[2:3, 1]
//!     let mut sel = Selector::new(AxisSelector::Range(2, 3), AxisSelector::Element(1));
//!     let sub = get_submatrix(&m, &mut sel)?;
//!     assert_eq!(sub.as_slice(), &[2.0, 3.0]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Rich selector grammar**: open ranges, "all", diagonal, index lists,
//!   exclusion by negative index, single-axis shorthand
//! - **Contiguous fast path**: selections mapping to one unbroken run of
//!   column-major storage are block-copied
//! - **Strict conformability**: every error surfaces before the first
//!   write; a failed mutation leaves the target unchanged
//! - **Metadata propagation**: row/column labels and temporal range tags
//!   carry over when dimensions are preserved

// Re-export the core selector model and validation surface
pub use submat_core::{
    // Selector model
    AxisSelector, Selector, SelectorKind,
    // Normalization and materialization
    consecutive_run, materialize_axis, normalize, Plan,
    // Error handling
    Result, SubmatError,
    // Storage collaborator boundary
    DenseMatrix, DenseMatrixMut,
    // Validation utilities
    check_conformable, check_index, checked_len,
};

// Implementation modules
pub mod extract;
pub mod matrix;
pub mod meta;
pub mod mutate;

// Public exports
pub use extract::get_submatrix;
pub use matrix::Matrix;
pub use mutate::{assign_scalar, replace_submatrix};
