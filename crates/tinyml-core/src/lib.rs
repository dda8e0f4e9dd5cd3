//! TinyML Core - Foundation Layer for TinyML Tensors
//!
//! This crate provides the building blocks shared by every other TinyML
//! crate: the runtime element kind of a tensor, the tagged storage that backs
//! it, and the error type used for all tensor operations.
//!
//! # Key Features
//! - Closed set of element kinds (`f32`, reserved `f16` container, `i8`)
//! - Tagged storage: the active representation is always known
//! - Typed access through the [`Element`] trait
//!
//! # Example
//! ```rust
//! use tinyml_core::{ElementKind, Storage};
//!
//! let storage = Storage::zeros(ElementKind::Int8, 6);
//! assert_eq!(storage.len(), 6);
//! assert_eq!(storage.size_bytes(), 6);
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

// =============================================================================
// Modules
// =============================================================================

pub mod dtype;
pub mod error;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use dtype::{Element, ElementKind};
pub use error::{Error, Result};
pub use storage::Storage;

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::dtype::{Element, ElementKind};
    pub use crate::error::{Error, Result};
    pub use crate::storage::Storage;
}
