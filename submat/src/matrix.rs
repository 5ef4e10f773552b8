//! Dense column-major matrix storage
//!
//! Concrete owner of the element buffer plus the optional row/column name
//! labels and temporal range tag that extraction carries over.

use std::fmt;

use submat_core::{checked_len, DenseMatrix, DenseMatrixMut, Result, SubmatError};

/// A dense, column-major matrix of `f64` values
///
/// Element `(row, col)` (0-based) lives at `data[col * rows + row]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    row_names: Option<Vec<String>>,
    col_names: Option<Vec<String>>,
    sample: Option<(i64, i64)>,
}

impl Matrix {
    /// Create a matrix from column-major data
    ///
    /// The data length must equal `rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(SubmatError::NonConformable {
                expected: (rows, cols),
                actual: (data.len(), 1),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            row_names: None,
            col_names: None,
            sample: None,
        })
    }

    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| SubmatError::AllocationFailure)?;
        data.resize(len, 0.0);
        Matrix::new(data, rows, cols)
    }

    /// A 1x1 matrix holding a single value
    pub fn scalar(value: f64) -> Self {
        Self {
            data: vec![value],
            rows: 1,
            cols: 1,
            row_names: None,
            col_names: None,
            sample: None,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total element count
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is a row or column vector
    pub fn is_vector(&self) -> bool {
        self.rows == 1 || self.cols == 1
    }

    /// Whether the matrix is 1x1
    pub fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// The single value of a 1x1 matrix, `None` otherwise
    pub fn value(&self) -> Option<f64> {
        if self.is_scalar() {
            self.data.first().copied()
        } else {
            None
        }
    }

    /// Get an element by 0-based position
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(col * self.rows + row).copied()
    }

    /// Set an element by 0-based position
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.rows {
            return Err(SubmatError::OutOfBounds(row + 1));
        }
        if col >= self.cols {
            return Err(SubmatError::OutOfBounds(col + 1));
        }
        self.data[col * self.rows + row] = value;
        Ok(())
    }

    /// Raw column-major backing storage
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw column-major backing storage
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// One full column of the backing storage, 0-based
    pub fn col_slice(&self, col: usize) -> Option<&[f64]> {
        if col >= self.cols {
            return None;
        }
        self.data.get(col * self.rows..(col + 1) * self.rows)
    }

    /// Attach column-name labels; the length must equal the column count
    pub fn set_col_names(&mut self, names: Vec<String>) -> Result<()> {
        if names.len() != self.cols {
            return Err(SubmatError::NonConformable {
                expected: (1, self.cols),
                actual: (1, names.len()),
            });
        }
        self.col_names = Some(names);
        Ok(())
    }

    /// Attach row-name labels; the length must equal the row count
    pub fn set_row_names(&mut self, names: Vec<String>) -> Result<()> {
        if names.len() != self.rows {
            return Err(SubmatError::NonConformable {
                expected: (self.rows, 1),
                actual: (names.len(), 1),
            });
        }
        self.row_names = Some(names);
        Ok(())
    }

    /// Column-name labels, if attached
    pub fn col_names(&self) -> Option<&[String]> {
        self.col_names.as_deref()
    }

    /// Row-name labels, if attached
    pub fn row_names(&self) -> Option<&[String]> {
        self.row_names.as_deref()
    }

    /// Tag the matrix with a temporal range
    pub fn set_sample(&mut self, t1: i64, t2: i64) {
        self.sample = Some((t1, t2));
    }

    /// The temporal range tag, if set
    pub fn sample(&self) -> Option<(i64, i64)> {
        self.sample
    }
}

impl DenseMatrix for Matrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Option<f64> {
        Matrix::get(self, row, col)
    }

    fn as_slice(&self) -> &[f64] {
        Matrix::as_slice(self)
    }
}

impl DenseMatrixMut for Matrix {
    fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        Matrix::set(self, row, col, value)
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        Matrix::as_mut_slice(self)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{:>12.5}", self.data[col * self.rows + row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
