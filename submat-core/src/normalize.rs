//! Selector normalization against a concrete matrix shape
//!
//! Normalization resolves every ambiguity a selector can carry: the
//! single-axis shorthand, open range bounds, exclusion lists. The result is
//! a [`Plan`] with no unresolved axis, every index bounds-checked, and the
//! scalar and contiguous fast paths already recognized.

use alloc::vec::Vec;

use crate::error::{Result, SubmatError};
use crate::materialize::{consecutive_run, materialize_axis};
use crate::selector::{AxisSelector, SelectorKind};
use crate::validation::check_index;

/// A selector resolved against a concrete matrix shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// A single cell, 1-based
    Scalar { row: usize, col: usize },
    /// The main diagonal
    Diagonal,
    /// One unbroken run of column-major storage
    ///
    /// `rows * cols` is the run length; one of the two dimensions is 1, so
    /// the orientation of the extracted vector is preserved.
    Contiguous {
        offset: usize,
        rows: usize,
        cols: usize,
    },
    /// Explicit ordered 1-based row and column index lists
    General { rows: Vec<usize>, cols: Vec<usize> },
}

impl Plan {
    /// Shape of the selection against a matrix of the given shape
    pub fn result_shape(&self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Plan::Scalar { .. } => (1, 1),
            Plan::Diagonal => (core::cmp::min(rows, cols), 1),
            Plan::Contiguous { rows, cols, .. } => (*rows, *cols),
            Plan::General { rows, cols } => (rows.len(), cols.len()),
        }
    }
}

/// Resolve a selector against a matrix shape
///
/// Applies the disambiguation rules in order: single-axis resolution,
/// scalar collapse, per-axis materialization, contiguous-run detection.
/// A selection that fails fast-path detection falls back to the general
/// plan rather than erroring.
pub fn normalize(kind: &SelectorKind, rows: usize, cols: usize) -> Result<Plan> {
    let (row_sel, col_sel) = match kind {
        SelectorKind::Diagonal => return Ok(Plan::Diagonal),
        SelectorKind::Cells { rows, cols } => (rows, cols),
    };

    let (row_sel, col_sel) = resolve_single_axis(row_sel, col_sel, rows, cols)?;
    if matches!(row_sel, AxisSelector::Unspecified) {
        return Err(SubmatError::InvalidSelector("unresolved axis"));
    }

    // Both axes degenerate to one positive index: a 0-dimensional selection
    if let (Some(row), Some(col)) = (
        degenerate_index(&row_sel, rows),
        degenerate_index(&col_sel, cols),
    ) {
        check_index(row, rows)?;
        check_index(col, cols)?;
        return Ok(Plan::Scalar { row, col });
    }

    let row_idx = materialize_axis(&row_sel, rows)?;
    let col_idx = materialize_axis(&col_sel, cols)?;

    // Column-major contiguous runs: a consecutive slice of one column, or a
    // consecutive slice of a one-row matrix.
    if col_idx.len() == 1 {
        if let Some((row_lo, len)) = consecutive_run(&row_idx) {
            return Ok(Plan::Contiguous {
                offset: (col_idx[0] - 1) * rows + (row_lo - 1),
                rows: len,
                cols: 1,
            });
        }
    } else if rows == 1 && row_idx.len() == 1 && row_idx[0] == 1 {
        if let Some((col_lo, len)) = consecutive_run(&col_idx) {
            return Ok(Plan::Contiguous {
                offset: col_lo - 1,
                rows: 1,
                cols: len,
            });
        }
    }

    Ok(Plan::General {
        rows: row_idx,
        cols: col_idx,
    })
}

/// Resolve the single-axis shorthand `M[sel]` against the matrix shape
///
/// With one column the given selector addresses rows. With one row it
/// transfers to the column axis. Against a matrix that is a vector in
/// neither dimension the shorthand is rejected rather than defaulted.
fn resolve_single_axis(
    row_sel: &AxisSelector,
    col_sel: &AxisSelector,
    rows: usize,
    cols: usize,
) -> Result<(AxisSelector, AxisSelector)> {
    if !matches!(col_sel, AxisSelector::Unspecified) {
        return Ok((row_sel.clone(), col_sel.clone()));
    }
    if cols == 1 {
        Ok((row_sel.clone(), AxisSelector::Element(1)))
    } else if rows == 1 {
        Ok((AxisSelector::Element(1), row_sel.clone()))
    } else {
        Err(SubmatError::AmbiguousIndex)
    }
}

/// A positive single-index axis: `Element(i)` or a degenerate `Range(x, x)`
fn degenerate_index(axis: &AxisSelector, axis_len: usize) -> Option<usize> {
    match axis {
        AxisSelector::Element(index) if *index > 0 => Some(*index as usize),
        AxisSelector::Range(lo, hi) => {
            let hi = if *hi == AxisSelector::TO_END {
                axis_len as i64
            } else {
                *hi
            };
            if *lo > 0 && *lo == hi {
                Some(*lo as usize)
            } else {
                None
            }
        }
        _ => None,
    }
}
