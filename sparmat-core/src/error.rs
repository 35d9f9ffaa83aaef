//! Error types for sparse matrix operations

/// Errors that can occur while building, converting, or mutating a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparseError {
    /// Coordinate outside the declared dimensions
    OutOfBounds,
    /// Parallel containers disagree in length, or a multiply operand has
    /// the wrong length
    SizeMismatch,
    /// The same coordinate appears more than once in constructor input
    DuplicateIndex,
    /// Conversion requested from the wrong representation
    InvalidState,
    /// Pointer array is not monotonically non-decreasing, does not start at
    /// zero, or does not cover all stored entries
    InvalidPointers,
    /// Exchange file could not be opened or parsed
    MalformedFile,
}

impl core::fmt::Display for SparseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SparseError::OutOfBounds => "Coordinate out of bounds",
            SparseError::SizeMismatch => "Container sizes do not match",
            SparseError::DuplicateIndex => "Coordinate defined more than once",
            SparseError::InvalidState => "Matrix is in the wrong storage state",
            SparseError::InvalidPointers => "Pointer array is not a valid prefix sum",
            SparseError::MalformedFile => "Malformed exchange file",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for SparseError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SparseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        extern crate alloc;
        use alloc::string::ToString;

        assert_eq!(
            SparseError::InvalidState.to_string(),
            "Matrix is in the wrong storage state"
        );
        assert_eq!(
            SparseError::DuplicateIndex.to_string(),
            "Coordinate defined more than once"
        );
    }
}
