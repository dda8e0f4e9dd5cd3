//! Element Kinds - TinyML Type System
//!
//! Defines the closed set of element representations a tensor can hold and
//! the [`Element`] trait binding each Rust scalar to its runtime kind.
//!
//! # Key Features
//! - Runtime kind information via `ElementKind`
//! - Byte width per kind (4 / 2 / 1)
//! - `f16` is a storage-only container: no arithmetic is defined on it
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use bytemuck::{Pod, Zeroable};
use half::f16;
use serde::{Deserialize, Serialize};

use core::fmt::Debug;

use crate::storage::Storage;

// =============================================================================
// ElementKind Enum
// =============================================================================

/// Runtime representation of a tensor's element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// 32-bit floating point.
    Float32,
    /// 16-bit container reserved for half precision values.
    Float16Container,
    /// 8-bit signed integer.
    Int8,
}

impl ElementKind {
    /// All element kinds, in tag order.
    pub const ALL: [Self; 3] = [Self::Float32, Self::Float16Container, Self::Int8];

    /// Returns the size in bytes of one element of this kind.
    #[must_use]
    pub const fn size_of(self) -> usize {
        match self {
            Self::Float32 => 4,
            Self::Float16Container => 2,
            Self::Int8 => 1,
        }
    }

    /// Returns the numeric tag of this kind.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Float32 => 0,
            Self::Float16Container => 1,
            Self::Int8 => 2,
        }
    }

    /// Returns the short name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float32 => "f32",
            Self::Float16Container => "f16",
            Self::Int8 => "i8",
        }
    }

    /// Returns true for the floating point kinds.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float16Container)
    }
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Float32
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Element Trait
// =============================================================================

/// Trait for the scalar types a tensor can store.
///
/// Each implementor maps to exactly one [`ElementKind`] and one [`Storage`]
/// variant, so a typed view of storage either matches the active
/// representation or is refused.
pub trait Element: Copy + Debug + Default + Send + Sync + Pod + Zeroable + 'static {
    /// The runtime kind for this scalar type.
    const KIND: ElementKind;

    /// Returns the kind for this type.
    #[must_use]
    fn kind() -> ElementKind {
        Self::KIND
    }

    /// Wraps a buffer of this type into tagged storage.
    fn into_storage(data: Vec<Self>) -> Storage;

    /// Borrows the buffer if the storage holds this type.
    fn view(storage: &Storage) -> Option<&[Self]>;

    /// Mutably borrows the buffer if the storage holds this type.
    fn view_mut(storage: &mut Storage) -> Option<&mut [Self]>;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float32;

    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::F32(data)
    }

    fn view(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::F32(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    fn view_mut(storage: &mut Storage) -> Option<&mut [Self]> {
        match storage {
            Storage::F32(data) => Some(data.as_mut_slice()),
            _ => None,
        }
    }
}

impl Element for f16 {
    const KIND: ElementKind = ElementKind::Float16Container;

    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::F16(data)
    }

    fn view(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::F16(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    fn view_mut(storage: &mut Storage) -> Option<&mut [Self]> {
        match storage {
            Storage::F16(data) => Some(data.as_mut_slice()),
            _ => None,
        }
    }
}

impl Element for i8 {
    const KIND: ElementKind = ElementKind::Int8;

    fn into_storage(data: Vec<Self>) -> Storage {
        Storage::I8(data)
    }

    fn view(storage: &Storage) -> Option<&[Self]> {
        match storage {
            Storage::I8(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    fn view_mut(storage: &mut Storage) -> Option<&mut [Self]> {
        match storage {
            Storage::I8(data) => Some(data.as_mut_slice()),
            _ => None,
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
    fn test_kind_sizes() {
        assert_eq!(ElementKind::Float32.size_of(), 4);
        assert_eq!(ElementKind::Float16Container.size_of(), 2);
        assert_eq!(ElementKind::Int8.size_of(), 1);
    }

    #[test]
    fn test_kind_sizes_match_scalars() {
        assert_eq!(ElementKind::Float32.size_of(), core::mem::size_of::<f32>());
        assert_eq!(
            ElementKind::Float16Container.size_of(),
            core::mem::size_of::<f16>()
        );
        assert_eq!(ElementKind::Int8.size_of(), core::mem::size_of::<i8>());
    }

    #[test]
    fn test_kind_tags_in_order() {
        let tags: Vec<u8> = ElementKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, vec![0, 1, 2]);
    }

    #[test]
    fn test_element_kinds() {
        assert_eq!(f32::kind(), ElementKind::Float32);
        assert_eq!(f16::kind(), ElementKind::Float16Container);
        assert_eq!(i8::kind(), ElementKind::Int8);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ElementKind::Float32.to_string(), "f32");
        assert_eq!(ElementKind::Int8.to_string(), "i8");
        assert!(ElementKind::Float16Container.is_float());
        assert!(!ElementKind::Int8.is_float());
    }
}
