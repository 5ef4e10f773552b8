//! Bounds and conformability validation for selections
//!
//! This module provides pure mathematical validation functions with no
//! allocation and no I/O dependencies.

use crate::error::{Result, SubmatError};

/// Validate a 1-based index against an axis length
///
/// Index 0 is always out of bounds; the engine never silently clamps.
pub const fn check_index(index: usize, axis_len: usize) -> Result<()> {
    if index == 0 || index > axis_len {
        return Err(SubmatError::OutOfBounds(index));
    }
    Ok(())
}

/// Validate that an operand shape matches an expected selection shape
pub const fn check_conformable(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected.0 != actual.0 || expected.1 != actual.1 {
        return Err(SubmatError::NonConformable { expected, actual });
    }
    Ok(())
}

/// Compute the element count for a shape, rejecting overflow
///
/// A shape whose element count does not fit in `usize` can never be
/// allocated, so overflow surfaces as an allocation failure.
pub const fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) => Ok(len),
        None => Err(SubmatError::AllocationFailure),
    }
}
