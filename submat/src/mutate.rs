//! In-place sub-matrix replacement and scalar assignment
//!
//! Both entry points validate completely before the first write: plan
//! resolution, conformability, and bounds all precede mutation, so a
//! failed call leaves the target untouched.

use submat_core::{consecutive_run, Plan, Result, Selector, SubmatError};

use crate::matrix::Matrix;

/// Overwrite the selected region of `target` with the contents of `source`
///
/// A 1x1 source broadcasts to every selected cell regardless of which plan
/// shape the selection resolved to. Otherwise the source must conform to
/// the selection: a vector of the run length for contiguous selections, a
/// vector of `min(rows, cols)` for the diagonal, and an exact shape match
/// for general selections.
pub fn replace_submatrix(
    target: &mut Matrix,
    selector: &mut Selector,
    source: &Matrix,
) -> Result<()> {
    let plan = selector.plan_for(target)?;

    // Scalar broadcast takes the same path as assign_scalar so the fast
    // and general plans stay semantically identical.
    if let Some(value) = source.value() {
        if plan.result_shape(target.rows(), target.cols()) != (1, 1) {
            return apply_scalar(target, plan, value);
        }
    }

    // A non-scalar source larger than the target cannot fit any selection
    if source.rows() > target.rows() || source.cols() > target.cols() {
        return Err(SubmatError::NonConformable {
            expected: target.shape(),
            actual: source.shape(),
        });
    }

    match plan {
        Plan::Scalar { row, col } => {
            let value = source.value().ok_or(SubmatError::NonConformable {
                expected: (1, 1),
                actual: source.shape(),
            })?;
            target.set(row - 1, col - 1, value)
        }
        Plan::Diagonal => {
            let n = target.rows().min(target.cols());
            if !source.is_vector() || source.len() != n {
                return Err(SubmatError::NonConformable {
                    expected: (n, 1),
                    actual: source.shape(),
                });
            }
            let stride = target.rows() + 1;
            for (i, &value) in source.as_slice().iter().enumerate() {
                target.as_mut_slice()[i * stride] = value;
            }
            Ok(())
        }
        Plan::Contiguous { offset, rows, cols } => {
            let len = rows * cols;
            if !source.is_vector() || source.len() != len {
                return Err(SubmatError::NonConformable {
                    expected: (*rows, *cols),
                    actual: source.shape(),
                });
            }
            let end = offset + len;
            let run = target
                .as_mut_slice()
                .get_mut(*offset..end)
                .ok_or(SubmatError::OutOfBounds(end))?;
            run.copy_from_slice(source.as_slice());
            Ok(())
        }
        Plan::General { rows, cols } => {
            if source.shape() != (rows.len(), cols.len()) {
                return Err(SubmatError::NonConformable {
                    expected: (rows.len(), cols.len()),
                    actual: source.shape(),
                });
            }
            replace_general(target, rows, cols, source)
        }
    }
}

/// Set every selected cell of `target` to `value`
///
/// The broadcast form of replacement, without a source matrix; contiguous
/// and diagonal selections fill storage directly.
pub fn assign_scalar(target: &mut Matrix, selector: &mut Selector, value: f64) -> Result<()> {
    let plan = selector.plan_for(target)?;
    apply_scalar(target, plan, value)
}

fn apply_scalar(target: &mut Matrix, plan: &Plan, value: f64) -> Result<()> {
    match plan {
        Plan::Scalar { row, col } => target.set(row - 1, col - 1, value),
        Plan::Diagonal => {
            let n = target.rows().min(target.cols());
            let stride = target.rows() + 1;
            for i in 0..n {
                target.as_mut_slice()[i * stride] = value;
            }
            Ok(())
        }
        Plan::Contiguous { offset, rows, cols } => {
            let end = offset + rows * cols;
            let run = target
                .as_mut_slice()
                .get_mut(*offset..end)
                .ok_or(SubmatError::OutOfBounds(end))?;
            run.fill(value);
            Ok(())
        }
        Plan::General { rows, cols } => {
            for &col in cols {
                for &row in rows {
                    target.set(row - 1, col - 1, value)?;
                }
            }
            Ok(())
        }
    }
}

fn replace_general(
    target: &mut Matrix,
    row_idx: &[usize],
    col_idx: &[usize],
    source: &Matrix,
) -> Result<()> {
    // A full consecutive row run means each target column is one slice
    let full_rows = consecutive_run(row_idx) == Some((1, target.rows()));
    let target_rows = target.rows();

    for (j, &col) in col_idx.iter().enumerate() {
        if full_rows {
            let src_col = source
                .col_slice(j)
                .ok_or(SubmatError::OutOfBounds(j + 1))?;
            let start = (col - 1) * target_rows;
            target.as_mut_slice()[start..start + target_rows].copy_from_slice(src_col);
        } else {
            for (i, &row) in row_idx.iter().enumerate() {
                let value = source
                    .get(i, j)
                    .ok_or(SubmatError::OutOfBounds(row))?;
                target.set(row - 1, col - 1, value)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::get_submatrix;
    use submat_core::AxisSelector;

    fn sample_3x3() -> Matrix {
        Matrix::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
            3,
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_replace_contiguous() {
        let mut m = sample_3x3();
        let mut sel = Selector::new(AxisSelector::Range(2, 3), AxisSelector::Element(1));
        let source = Matrix::new(vec![20.0, 30.0], 2, 1).unwrap();
        replace_submatrix(&mut m, &mut sel, &source).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 20.0, 30.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_replace_contiguous_wrong_length() {
        let mut m = sample_3x3();
        let before = m.clone();
        let mut sel = Selector::new(AxisSelector::Range(2, 3), AxisSelector::Element(1));
        let source = Matrix::new(vec![20.0, 30.0, 40.0], 3, 1).unwrap();
        assert_eq!(
            replace_submatrix(&mut m, &mut sel, &source),
            Err(SubmatError::NonConformable {
                expected: (2, 1),
                actual: (3, 1),
            })
        );
        // Failed validation leaves the target untouched
        assert_eq!(m, before);
    }

    #[test]
    fn test_replace_diagonal() {
        let mut m = sample_3x3();
        let source = Matrix::new(vec![10.0, 50.0, 90.0], 3, 1).unwrap();
        replace_submatrix(&mut m, &mut Selector::diagonal(), &source).unwrap();
        assert_eq!(m.as_slice(), &[10.0, 2.0, 3.0, 4.0, 50.0, 6.0, 7.0, 8.0, 90.0]);
    }

    #[test]
    fn test_replace_diagonal_nonconformable() {
        let mut m = sample_3x3();
        let before = m.clone();
        let source = Matrix::new(vec![1.0, 2.0], 2, 1).unwrap();
        assert_eq!(
            replace_submatrix(&mut m, &mut Selector::diagonal(), &source),
            Err(SubmatError::NonConformable {
                expected: (3, 1),
                actual: (2, 1),
            })
        );
        assert_eq!(m, before);
    }

    #[test]
    fn test_replace_general() {
        let mut m = sample_3x3();
        let mut sel = Selector::new(
            AxisSelector::IndexList(vec![1, 3]),
            AxisSelector::IndexList(vec![2, 3]),
        );
        let source = Matrix::new(vec![-1.0, -2.0, -3.0, -4.0], 2, 2).unwrap();
        replace_submatrix(&mut m, &mut sel, &source).unwrap();
        assert_eq!(
            m.as_slice(),
            &[1.0, 2.0, 3.0, -1.0, 5.0, -2.0, -3.0, 8.0, -4.0]
        );
    }

    #[test]
    fn test_replace_full_column_block() {
        let mut m = sample_3x3();
        let mut sel = Selector::new(AxisSelector::All, AxisSelector::IndexList(vec![3, 1]));
        let source = Matrix::new(vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0], 3, 2).unwrap();
        replace_submatrix(&mut m, &mut sel, &source).unwrap();
        // Source column 0 lands in target column 3, column 1 in column 1
        assert_eq!(
            m.as_slice(),
            &[-4.0, -5.0, -6.0, 4.0, 5.0, 6.0, -1.0, -2.0, -3.0]
        );
    }

    #[test]
    fn test_scalar_broadcast_over_selection() {
        let mut m = sample_3x3();
        let mut sel = Selector::new(AxisSelector::Range(1, 2), AxisSelector::Range(2, 3));
        replace_submatrix(&mut m, &mut sel, &Matrix::scalar(0.0)).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 0.0, 0.0, 6.0, 0.0, 0.0, 9.0]);
    }

    #[test]
    fn test_scalar_broadcast_on_contiguous_plan() {
        // Broadcast must behave identically across the optimization boundary
        let mut m = sample_3x3();
        let mut sel = Selector::new(AxisSelector::Range(1, 3), AxisSelector::Element(2));
        replace_submatrix(&mut m, &mut sel, &Matrix::scalar(7.0)).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 7.0, 7.0, 7.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_oversized_source_rejected() {
        let mut m = sample_3x3();
        let before = m.clone();
        let mut sel = Selector::all();
        let source = Matrix::zeros(4, 3).unwrap();
        assert_eq!(
            replace_submatrix(&mut m, &mut sel, &source),
            Err(SubmatError::NonConformable {
                expected: (3, 3),
                actual: (4, 3),
            })
        );
        assert_eq!(m, before);
    }

    #[test]
    fn test_assign_scalar_all() {
        let mut m = sample_3x3();
        assign_scalar(&mut m, &mut Selector::all(), 2.5).unwrap();
        assert!(m.as_slice().iter().all(|&v| v == 2.5));
    }

    #[test]
    fn test_assign_scalar_diagonal() {
        let mut m = sample_3x3();
        assign_scalar(&mut m, &mut Selector::diagonal(), 0.0).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 2.0, 3.0, 4.0, 0.0, 6.0, 7.0, 8.0, 0.0]);
    }

    #[test]
    fn test_assign_scalar_element() {
        let mut m = sample_3x3();
        assign_scalar(&mut m, &mut Selector::element(3, 1), -1.0).unwrap();
        assert_eq!(m.get(2, 0), Some(-1.0));
    }

    #[test]
    fn test_roundtrip_extract_replace() {
        let mut m = sample_3x3();
        let before = m.clone();
        let mut sel = Selector::new(AxisSelector::Range(2, 3), AxisSelector::Range(1, 2));
        let sub = get_submatrix(&m, &mut sel).unwrap();
        replace_submatrix(&mut m, &mut sel, &sub).unwrap();
        assert_eq!(m, before);
    }
}
