//! Storage - Tagged Memory for Tensors
//!
//! Storage is a sum type over the three buffer representations. Exactly one
//! representation is active at a time, and every buffer is exclusively owned:
//! cloning storage always copies the elements.
//!
//! # Example
//! ```rust
//! use tinyml_core::{ElementKind, Storage};
//!
//! let storage = Storage::from_vec(vec![1.0_f32, 2.0, 3.0]);
//! assert_eq!(storage.kind(), ElementKind::Float32);
//! assert_eq!(storage.as_slice::<f32>().unwrap(), &[1.0, 2.0, 3.0]);
//! assert!(storage.as_slice::<i8>().is_err());
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use half::f16;

use crate::dtype::{Element, ElementKind};
use crate::error::{Error, Result};

// =============================================================================
// Storage Enum
// =============================================================================

/// Owned, tagged element buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    /// 32-bit floating point buffer.
    F32(Vec<f32>),
    /// 16-bit container buffer. Never used for arithmetic.
    F16(Vec<f16>),
    /// 8-bit signed integer buffer.
    I8(Vec<i8>),
}

impl Storage {
    /// Allocates zero-filled storage of `len` elements of the given kind.
    #[must_use]
    pub fn zeros(kind: ElementKind, len: usize) -> Self {
        match kind {
            ElementKind::Float32 => Self::F32(vec![0.0; len]),
            ElementKind::Float16Container => Self::F16(vec![f16::ZERO; len]),
            ElementKind::Int8 => Self::I8(vec![0; len]),
        }
    }

    /// Wraps an existing vector, taking ownership of it.
    #[must_use]
    pub fn from_vec<T: Element>(data: Vec<T>) -> Self {
        T::into_storage(data)
    }

    /// Returns the active element kind.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::F32(_) => ElementKind::Float32,
            Self::F16(_) => ElementKind::Float16Container,
            Self::I8(_) => ElementKind::Int8,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::F32(data) => data.len(),
            Self::F16(data) => data.len(),
            Self::I8(data) => data.len(),
        }
    }

    /// Returns true if the storage holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the size in bytes of the buffer.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.len() * self.kind().size_of()
    }

    /// Borrows the buffer as `T`, failing if `T` is not the active kind.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        let actual = self.kind();
        T::view(self).ok_or_else(|| Error::kind_mismatch(T::KIND, actual))
    }

    /// Mutably borrows the buffer as `T`, failing if `T` is not the active kind.
    pub fn as_slice_mut<T: Element>(&mut self) -> Result<&mut [T]> {
        let actual = self.kind();
        T::view_mut(self).ok_or_else(|| Error::kind_mismatch(T::KIND, actual))
    }

    /// Returns the raw bytes of the buffer in native byte order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::F32(data) => bytemuck::cast_slice(data),
            Self::F16(data) => bytemuck::cast_slice(data),
            Self::I8(data) => bytemuck::cast_slice(data),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_zeros() {
        for kind in ElementKind::ALL {
            let storage = Storage::zeros(kind, 6);
            assert_eq!(storage.kind(), kind);
            assert_eq!(storage.len(), 6);
            assert_eq!(storage.size_bytes(), 6 * kind.size_of());
            assert!(storage.as_bytes().iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_storage_from_vec() {
        let storage = Storage::from_vec(vec![-1_i8, 2, 3]);
        assert_eq!(storage.kind(), ElementKind::Int8);
        assert_eq!(storage.as_slice::<i8>().unwrap(), &[-1, 2, 3]);
    }

    #[test]
    fn test_storage_kind_mismatch() {
        let mut storage = Storage::zeros(ElementKind::Float16Container, 4);
        assert_eq!(
            storage.as_slice::<f32>().unwrap_err(),
            Error::kind_mismatch(ElementKind::Float32, ElementKind::Float16Container)
        );
        assert!(storage.as_slice_mut::<i8>().is_err());
        assert!(storage.as_slice_mut::<f16>().is_ok());
    }

    #[test]
    fn test_storage_clone_is_deep() {
        let original = Storage::from_vec(vec![1.0_f32, 2.0]);
        let mut copy = original.clone();
        copy.as_slice_mut::<f32>().unwrap()[0] = 99.0;

        assert_eq!(original.as_slice::<f32>().unwrap()[0], 1.0);
    }

    #[test]
    fn test_storage_as_bytes() {
        let storage = Storage::from_vec(vec![1.0_f32]);
        assert_eq!(storage.as_bytes(), &1.0_f32.to_ne_bytes());
    }
}
