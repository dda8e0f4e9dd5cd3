//! Tensor - Core Two-Dimensional Array Type
//!
//! The `Tensor` struct pairs a `rows x cols` shape with tagged storage.
//! Storage is held in an `Option`: `release` takes it out, after which every
//! operation touching elements fails with `UseAfterRelease`. Dropping a
//! tensor that was never released reclaims the storage as well, so a buffer
//! can neither leak nor be freed independently of its tensor.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt;

use tinyml_core::dtype::{Element, ElementKind};
use tinyml_core::error::{Error, Result};
use tinyml_core::storage::Storage;

// =============================================================================
// Tensor Struct
// =============================================================================

/// A row-major two-dimensional array holding one element representation.
pub struct Tensor {
    rows: usize,
    cols: usize,
    kind: ElementKind,
    /// `None` once the tensor has been released.
    storage: Option<Storage>,
}

/// Validates a shape and returns its element count.
fn checked_numel(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidShape { rows, cols });
    }
    rows.checked_mul(cols).ok_or(Error::InvalidShape { rows, cols })
}

impl Tensor {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Allocates a tensor of the given shape and kind.
    ///
    /// Elements start zeroed; callers should treat them as unspecified until
    /// written.
    ///
    /// # Arguments
    /// * `rows` - Number of rows, must be positive
    /// * `cols` - Number of columns, must be positive
    /// * `kind` - Element representation of the buffer
    ///
    /// # Returns
    /// New tensor, or `InvalidShape` without allocating anything.
    pub fn new(rows: usize, cols: usize, kind: ElementKind) -> Result<Self> {
        let numel = checked_numel(rows, cols)?;
        tracing::debug!(rows, cols, kind = %kind, "allocating tensor");

        Ok(Self {
            rows,
            cols,
            kind,
            storage: Some(Storage::zeros(kind, numel)),
        })
    }

    /// Creates a tensor from row-major data, taking ownership of the vector.
    ///
    /// # Returns
    /// New tensor, or an error if the shape is invalid or the data length
    /// does not equal `rows * cols`.
    pub fn from_vec<T: Element>(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let numel = checked_numel(rows, cols)?;
        if data.len() != numel {
            return Err(Error::DataLengthMismatch {
                expected: numel,
                actual: data.len(),
            });
        }

        Ok(Self {
            rows,
            cols,
            kind: T::KIND,
            storage: Some(Storage::from_vec(data)),
        })
    }

    /// Creates a tensor from a slice by copying the data.
    pub fn from_slice<T: Element>(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Makes an independent copy with its own buffer.
    pub fn deep_copy(&self) -> Result<Self> {
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            kind: self.kind,
            storage: Some(self.storage()?.clone()),
        })
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the element kind.
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the total number of elements.
    pub const fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the buffer size in bytes.
    pub const fn size_bytes(&self) -> usize {
        self.numel() * self.kind.size_of()
    }

    /// Returns true once `release` has been called.
    pub const fn is_released(&self) -> bool {
        self.storage.is_none()
    }

    // =========================================================================
    // Storage Access
    // =========================================================================

    /// Borrows the underlying storage.
    pub fn storage(&self) -> Result<&Storage> {
        self.storage.as_ref().ok_or(Error::UseAfterRelease)
    }

    fn storage_mut(&mut self) -> Result<&mut Storage> {
        self.storage.as_mut().ok_or(Error::UseAfterRelease)
    }

    /// Returns the linear offset of element `(row, col)`.
    ///
    /// Negative indices are rejected rather than counted from the end.
    pub fn offset(&self, row: isize, col: isize) -> Result<usize> {
        self.storage()?;

        let oob = || Error::out_of_bounds(row, col, self.rows, self.cols);
        let r = usize::try_from(row).map_err(|_| oob())?;
        let c = usize::try_from(col).map_err(|_| oob())?;
        if r >= self.rows || c >= self.cols {
            return Err(oob());
        }
        Ok(r * self.cols + c)
    }

    /// Reads element `(row, col)`.
    pub fn get<T: Element>(&self, row: isize, col: isize) -> Result<T> {
        let offset = self.offset(row, col)?;
        Ok(self.as_slice::<T>()?[offset])
    }

    /// Writes element `(row, col)`.
    pub fn set<T: Element>(&mut self, row: isize, col: isize, value: T) -> Result<()> {
        let offset = self.offset(row, col)?;
        self.as_slice_mut::<T>()?[offset] = value;
        Ok(())
    }

    /// Borrows the row-major buffer as `T`.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        self.storage()?.as_slice()
    }

    /// Mutably borrows the row-major buffer as `T`.
    pub fn as_slice_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        self.storage_mut()?.as_slice_mut()
    }

    /// Copies the buffer out as a vector of `T`.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        Ok(self.as_slice::<T>()?.to_vec())
    }

    /// Borrows row `row` as `T`.
    pub fn row<T: Element>(&self, row: isize) -> Result<&[T]> {
        let start = self.offset(row, 0)?;
        Ok(&self.as_slice::<T>()?[start..start + self.cols])
    }

    /// Returns the raw bytes of the buffer.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        Ok(self.storage()?.as_bytes())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Frees the backing buffer.
    ///
    /// The tensor keeps its shape and kind, but every later element access,
    /// copy, quantization or second release fails with `UseAfterRelease`.
    pub fn release(&mut self) -> Result<()> {
        let storage = self.storage.take().ok_or(Error::UseAfterRelease)?;
        tracing::debug!(
            rows = self.rows,
            cols = self.cols,
            bytes = storage.size_bytes(),
            "released tensor"
        );
        drop(storage);
        Ok(())
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={}x{}, kind={}", self.rows, self.cols, self.kind)?;
        if self.is_released() {
            write!(f, ", released")?;
        }
        write!(f, ")")
    }
}

// =============================================================================
// Tests
// =============================================================================
