//! Index materialization: concrete index lists from axis selectors
//!
//! Materialization turns one axis selector plus a concrete axis length into
//! an ordered list of 1-based positions. Exclusion selectors expand to the
//! ordered complement of the named indices. Every produced index is
//! validated against `[1, axis_len]`; the first offender is reported.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Result, SubmatError};
use crate::selector::AxisSelector;
use crate::validation::check_index;

/// Materialize one axis selector against a concrete axis length
///
/// Exposed for callers that need raw row/column index lists directly, for
/// example to drive column naming. `Unspecified` axes must be resolved
/// against a matrix shape first and are rejected here.
pub fn materialize_axis(axis: &AxisSelector, axis_len: usize) -> Result<Vec<usize>> {
    match axis {
        AxisSelector::All => Ok((1..=axis_len).collect()),
        AxisSelector::Unspecified => Err(SubmatError::InvalidSelector("unresolved axis")),
        AxisSelector::Element(index) => materialize_element(*index, axis_len),
        AxisSelector::Range(lo, hi) => materialize_range(*lo, *hi, axis_len),
        AxisSelector::IndexList(values) => materialize_list(values, axis_len),
    }
}

/// Recognize a strictly consecutive ascending run of 1-based indices
///
/// Returns `(start, len)` when the list is `start, start+1, ..`; such runs
/// map to unbroken spans of column-major storage.
pub fn consecutive_run(indices: &[usize]) -> Option<(usize, usize)> {
    let first = *indices.first()?;
    for (k, &index) in indices.iter().enumerate() {
        if index != first + k {
            return None;
        }
    }
    Some((first, indices.len()))
}

fn materialize_element(index: i64, axis_len: usize) -> Result<Vec<usize>> {
    if index < 0 {
        // A negative element is a one-element exclusion
        return exclude_one(index.unsigned_abs() as usize, axis_len);
    }
    let index = index as usize;
    check_index(index, axis_len)?;
    Ok(vec![index])
}

fn materialize_range(lo: i64, hi: i64, axis_len: usize) -> Result<Vec<usize>> {
    let hi = if hi == AxisSelector::TO_END {
        axis_len as i64
    } else {
        hi
    };

    if lo < 0 && lo == hi {
        // Degenerate negative range, same one-element exclusion as Element
        return exclude_one(lo.unsigned_abs() as usize, axis_len);
    }
    if lo < 0 || hi < 0 {
        return Err(SubmatError::InvalidSelector("negative range bound"));
    }
    if lo == 0 || hi == 0 {
        return Err(SubmatError::OutOfBounds(0));
    }
    if hi < lo {
        return Err(SubmatError::InvalidSelector("non-positive range span"));
    }

    let (lo, hi) = (lo as usize, hi as usize);
    check_index(lo, axis_len)?;
    check_index(hi, axis_len)?;
    Ok((lo..=hi).collect())
}

fn materialize_list(values: &[i64], axis_len: usize) -> Result<Vec<usize>> {
    if values.is_empty() {
        // Deliberate empty selection
        return Ok(Vec::new());
    }

    let negatives = values.iter().filter(|v| **v < 0).count();
    if negatives == values.len() {
        // Exclusion selector: ordered complement of the named indices
        let mut excluded = vec![false; axis_len];
        for value in values {
            let index = value.unsigned_abs() as usize;
            check_index(index, axis_len)?;
            excluded[index - 1] = true;
        }
        return Ok((1..=axis_len).filter(|i| !excluded[i - 1]).collect());
    }
    if negatives > 0 {
        return Err(SubmatError::InvalidSelector("mixed-sign index list"));
    }

    let mut indices = Vec::with_capacity(values.len());
    for value in values {
        let index = *value as usize;
        check_index(index, axis_len)?;
        indices.push(index);
    }
    Ok(indices)
}

fn exclude_one(index: usize, axis_len: usize) -> Result<Vec<usize>> {
    check_index(index, axis_len)?;
    Ok((1..=axis_len).filter(|i| *i != index).collect())
}
