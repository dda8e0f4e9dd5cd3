//! TinyML Tensor - Two-Dimensional Tensor Container
//!
//! This crate provides the `Tensor` type: a row-major `rows x cols` buffer
//! tagged with a single element kind. Tensors exclusively own their storage,
//! reject out-of-range indices and refuse every operation once released.
//!
//! # Key Features
//! - Fixed rank of two, row-major addressing (`i * cols + j`)
//! - Typed element access checked against the active kind
//! - Explicit `release`, with automatic reclamation on every other path
//! - Display collaborator kept separate from computation
//!
//! # Example
//! ```rust
//! use tinyml_tensor::{ElementKind, Tensor};
//!
//! let mut t = Tensor::new(2, 3, ElementKind::Float32).unwrap();
//! t.set(1, 2, 4.5_f32).unwrap();
//! assert_eq!(t.get::<f32>(1, 2).unwrap(), 4.5);
//! assert!(t.get::<f32>(2, 0).is_err());
//!
//! t.release().unwrap();
//! assert!(t.get::<f32>(0, 0).is_err());
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

pub mod display;
pub mod tensor;

// =============================================================================
// Re-exports
// =============================================================================

pub use display::{render, TensorDisplay};
pub use tensor::Tensor;
pub use tinyml_core::{Element, ElementKind, Error, Result};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::display::{render, TensorDisplay};
    pub use crate::tensor::Tensor;
    pub use tinyml_core::{Element, ElementKind, Error, Result};
}
