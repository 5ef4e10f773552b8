//! Dense matrix access traits
//!
//! This module defines the storage collaborator boundary: the engines
//! address any dense column-major matrix through these traits, with no
//! assumption about who owns the allocation.

use crate::error::Result;

/// Read access to a dense column-major matrix
pub trait DenseMatrix {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Get an element by 0-based position
    ///
    /// Returns `None` when the position is out of bounds.
    fn get(&self, row: usize, col: usize) -> Option<f64>;

    /// Raw column-major backing storage, length `rows * cols`
    ///
    /// Needed only by the contiguous fast path.
    fn as_slice(&self) -> &[f64];
}

/// Mutable access to a dense column-major matrix
pub trait DenseMatrixMut: DenseMatrix {
    /// Set an element by 0-based position
    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()>;

    /// Mutable raw column-major backing storage
    fn as_mut_slice(&mut self) -> &mut [f64];
}
