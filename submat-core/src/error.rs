//! Error types for sub-matrix operations

/// Errors that can occur while resolving or applying a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmatError {
    /// A 1-based index outside `[1, axis_length]`
    OutOfBounds(usize),
    /// Operand shape does not match the selection shape
    NonConformable {
        /// Shape the selection requires, as (rows, cols)
        expected: (usize, usize),
        /// Shape the operand actually has, as (rows, cols)
        actual: (usize, usize),
    },
    /// A single-axis selection against a matrix that is a vector in neither dimension
    AmbiguousIndex,
    /// The selector itself is malformed
    InvalidSelector(&'static str),
    /// The result matrix could not be allocated
    AllocationFailure,
}

impl core::fmt::Display for SubmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SubmatError::OutOfBounds(index) => write!(f, "Index {index} out of bounds"),
            SubmatError::NonConformable { expected, actual } => write!(
                f,
                "Non-conformable operand: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            SubmatError::AmbiguousIndex => write!(f, "Ambiguous single-axis selection"),
            SubmatError::InvalidSelector(reason) => write!(f, "Invalid selector: {reason}"),
            SubmatError::AllocationFailure => write!(f, "Result matrix could not be allocated"),
        }
    }
}

/// Result type for sub-matrix operations
pub type Result<T> = core::result::Result<T, SubmatError>;
