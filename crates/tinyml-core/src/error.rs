//! Error Types - TinyML Core Error Handling
//!
//! Provides the error type for tensor construction, element access and
//! lifecycle violations.
//!
//! # Key Features
//! - Checked, fail-fast replacements for out-of-bounds and use-after-release
//! - Detailed error context for debugging
//! - Integration with `std::error::Error`
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use thiserror::Error;

use crate::dtype::ElementKind;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for tensor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dimension was zero, or the element count overflowed.
    #[error("Invalid shape: {rows}x{cols} (dimensions must be positive)")]
    InvalidShape {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// Element access outside `[0, rows) x [0, cols)`.
    #[error("Index out of bounds: ({row}, {col}) for tensor of shape {rows}x{cols}")]
    OutOfBoundsAccess {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Number of rows in the tensor.
        rows: usize,
        /// Number of columns in the tensor.
        cols: usize,
    },

    /// Operation on a tensor whose storage has been released.
    #[error("Tensor used after release")]
    UseAfterRelease,

    /// Typed access with a scalar that does not match the tensor's kind.
    #[error("Element kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// The kind the caller asked for.
        expected: ElementKind,
        /// The kind actually stored.
        actual: ElementKind,
    },

    /// Data length does not match `rows * cols`.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Provided number of elements.
        actual: usize,
    },
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for tensor operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a new kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: ElementKind, actual: ElementKind) -> Self {
        Self::KindMismatch { expected, actual }
    }

    /// Creates a new out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(row: isize, col: isize, rows: usize, cols: usize) -> Self {
        Self::OutOfBoundsAccess {
            row,
            col,
            rows,
            cols,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
