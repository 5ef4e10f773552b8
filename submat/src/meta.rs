//! Metadata propagation from source to extracted matrices
//!
//! Extraction results inherit name labels and the temporal range tag only
//! when the corresponding dimension is fully preserved; partial selections
//! carry no labels.

use crate::matrix::Matrix;

/// Carry labels and the temporal range tag onto an extraction result
pub fn propagate(source: &Matrix, result: &mut Matrix) {
    if result.rows() == source.rows() {
        if let Some((t1, t2)) = source.sample() {
            result.set_sample(t1, t2);
        }
        if let Some(names) = source.row_names() {
            // Length equals the row count by the guard above
            let _ = result.set_row_names(names.to_vec());
        }
    }
    if result.cols() == source.cols() {
        if let Some(names) = source.col_names() {
            let _ = result.set_col_names(names.to_vec());
        }
    }
}
