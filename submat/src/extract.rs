//! Sub-matrix extraction
//!
//! Produces a new matrix (a 1x1 matrix for scalar selections) from a source
//! matrix and a selector. Contiguous selections are copied as one slice;
//! general selections with a full row run block-copy whole columns.

use submat_core::{consecutive_run, Plan, Result, Selector, SubmatError};

use crate::matrix::Matrix;
use crate::meta;

/// Extract the selected region of `matrix` as a new matrix
///
/// Scalar selections come back as 1x1 matrices and the diagonal as a
/// `min(rows, cols)` x 1 column vector. Name labels and the temporal range
/// tag carry over when the result spans the full corresponding dimension
/// of the source.
pub fn get_submatrix(matrix: &Matrix, selector: &mut Selector) -> Result<Matrix> {
    let plan = selector.plan_for(matrix)?;

    let mut result = match plan {
        Plan::Scalar { row, col } => {
            let value = matrix
                .get(row - 1, col - 1)
                .ok_or(SubmatError::OutOfBounds(*row))?;
            Matrix::scalar(value)
        }
        Plan::Diagonal => extract_diagonal(matrix)?,
        Plan::Contiguous { offset, rows, cols } => {
            let end = offset + rows * cols;
            let run = matrix
                .as_slice()
                .get(*offset..end)
                .ok_or(SubmatError::OutOfBounds(end))?;
            Matrix::new(run.to_vec(), *rows, *cols)?
        }
        Plan::General { rows, cols } => {
            let mut out = Matrix::zeros(rows.len(), cols.len())?;
            extract_general(matrix, rows, cols, &mut out)?;
            out
        }
    };

    meta::propagate(matrix, &mut result);
    Ok(result)
}

fn extract_diagonal(matrix: &Matrix) -> Result<Matrix> {
    let n = matrix.rows().min(matrix.cols());
    let stride = matrix.rows() + 1;
    let src = matrix.as_slice();
    let data: Vec<f64> = (0..n).map(|i| src[i * stride]).collect();
    Matrix::new(data, n, 1)
}

/// Fill `out` by iterating materialized row/column index lists
///
/// Also exercised directly by tests that compare the general path against
/// the contiguous fast path over the same selection.
pub(crate) fn extract_general(
    src: &Matrix,
    row_idx: &[usize],
    col_idx: &[usize],
    out: &mut Matrix,
) -> Result<()> {
    let n = row_idx.len();
    // A full consecutive row run means each selected column is one slice
    let full_rows = consecutive_run(row_idx) == Some((1, src.rows()));

    for (j, &col) in col_idx.iter().enumerate() {
        if full_rows {
            let src_col = src
                .col_slice(col - 1)
                .ok_or(SubmatError::OutOfBounds(col))?;
            out.as_mut_slice()[j * n..(j + 1) * n].copy_from_slice(src_col);
        } else {
            for (i, &row) in row_idx.iter().enumerate() {
                let value = src
                    .get(row - 1, col - 1)
                    .ok_or(SubmatError::OutOfBounds(row))?;
                out.as_mut_slice()[j * n + i] = value;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use submat_core::AxisSelector;

    fn sample_3x3() -> Matrix {
        // Columns [1,2,3], [4,5,6], [7,8,9]; diagonal [1,5,9]
        Matrix::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            3,
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_scalar_extraction() {
        let m = sample_3x3();
        let mut sel = Selector::element(2, 3);
        let out = get_submatrix(&m, &mut sel).unwrap();
        assert_eq!(out.shape(), (1, 1));
        assert_eq!(out.value(), Some(8.0));
    }

    #[test]
    fn test_diagonal_extraction() {
        let m = sample_3x3();
        let out = get_submatrix(&m, &mut Selector::diagonal()).unwrap();
        assert_eq!(out.shape(), (3, 1));
        assert_eq!(out.as_slice(), &[1.0, 5.0, 9.0]);
    }

    #[test]
    fn test_diagonal_of_rectangular() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let out = get_submatrix(&m, &mut Selector::diagonal()).unwrap();
        assert_eq!(out.shape(), (2, 1));
        assert_eq!(out.as_slice(), &[1.0, 4.0]);
    }

    #[test]
    fn test_contiguous_extraction() {
        let m = sample_3x3();
        let mut sel = Selector::new(AxisSelector::Range(2, 3), AxisSelector::Element(2));
        let out = get_submatrix(&m, &mut sel).unwrap();
        assert_eq!(out.shape(), (2, 1));
        assert_eq!(out.as_slice(), &[5.0, 6.0]);
    }

    #[test]
    fn test_column_vector_shorthand() {
        // 4x1 column vector, single-axis range 2:3
        let v = Matrix::new(vec![10.0, 20.0, 30.0, 40.0], 4, 1).unwrap();
        let mut sel = Selector::single_axis(AxisSelector::Range(2, 3));
        let out = get_submatrix(&v, &mut sel).unwrap();
        assert_eq!(out.shape(), (2, 1));
        assert_eq!(out.as_slice(), &[20.0, 30.0]);
    }

    #[test]
    fn test_row_vector_shorthand_transfers_axis() {
        // 1x4 row vector, single-axis Element(2) addresses the column
        let v = Matrix::new(vec![10.0, 20.0, 30.0, 40.0], 1, 4).unwrap();
        let mut sel = Selector::single_axis(AxisSelector::Element(2));
        let out = get_submatrix(&v, &mut sel).unwrap();
        assert_eq!(out.shape(), (1, 1));
        assert_eq!(out.value(), Some(20.0));
    }

    #[test]
    fn test_row_vector_slice_keeps_orientation() {
        let v = Matrix::new(vec![10.0, 20.0, 30.0, 40.0], 1, 4).unwrap();
        let mut sel = Selector::single_axis(AxisSelector::Range(2, 4));
        let out = get_submatrix(&v, &mut sel).unwrap();
        assert_eq!(out.shape(), (1, 3));
        assert_eq!(out.as_slice(), &[20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_general_extraction() {
        let m = sample_3x3();
        let mut sel = Selector::new(
            AxisSelector::IndexList(vec![1, 3]),
            AxisSelector::IndexList(vec![3, 1]),
        );
        let out = get_submatrix(&m, &mut sel).unwrap();
        assert_eq!(out.shape(), (2, 2));
        // Columns in requested order: [7,9] then [1,3]
        assert_eq!(out.as_slice(), &[7.0, 9.0, 1.0, 3.0]);
    }

    #[test]
    fn test_exclusion_extraction() {
        let m = sample_3x3();
        let mut sel = Selector::new(AxisSelector::IndexList(vec![-2]), AxisSelector::All);
        let out = get_submatrix(&m, &mut sel).unwrap();
        assert_eq!(out.shape(), (2, 3));
        assert_eq!(out.as_slice(), &[1.0, 3.0, 4.0, 6.0, 7.0, 9.0]);
    }

    #[test]
    fn test_out_of_bounds_never_clamped() {
        let m = sample_3x3();
        assert_eq!(
            get_submatrix(&m, &mut Selector::element(0, 1)),
            Err(SubmatError::OutOfBounds(0))
        );
        assert_eq!(
            get_submatrix(&m, &mut Selector::element(1, 4)),
            Err(SubmatError::OutOfBounds(4))
        );
    }

    #[test]
    fn test_contiguous_matches_general_path() {
        let m = sample_3x3();

        // A selection the planner resolves as contiguous
        let mut sel = Selector::new(AxisSelector::Range(1, 3), AxisSelector::Element(3));
        let fast = get_submatrix(&m, &mut sel).unwrap();

        // The same selection forced down the general path
        let mut forced = Matrix::zeros(3, 1).unwrap();
        extract_general(&m, &[1, 2, 3], &[3], &mut forced).unwrap();

        assert_eq!(fast.as_slice(), forced.as_slice());
        assert_eq!(fast.shape(), forced.shape());
    }

    #[test]
    fn test_empty_selection() {
        let m = sample_3x3();
        let mut sel = Selector::new(AxisSelector::IndexList(vec![]), AxisSelector::All);
        let out = get_submatrix(&m, &mut sel).unwrap();
        assert_eq!(out.shape(), (0, 3));
        assert!(out.is_empty());
    }
}
