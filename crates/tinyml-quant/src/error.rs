//! Quantization Error Types
//!
//! Error types for quantization operations.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use thiserror::Error;
use tinyml_core::ElementKind;

/// Result type for quantization operations.
pub type QuantResult<T> = Result<T, QuantError>;

/// Errors that can occur during quantization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantError {
    /// The input tensor is not of a kind this quantizer accepts.
    #[error("Unsupported conversion: only f32 can be quantized to {to}, got {from}")]
    UnsupportedConversion {
        /// Kind of the input tensor.
        from: ElementKind,
        /// Requested output kind.
        to: ElementKind,
    },

    /// The scale is zero, so no value can be divided by it.
    #[error("Degenerate scale: scale is zero")]
    DegenerateScale,

    /// A caller-supplied scale was negative or NaN.
    #[error("Invalid scale: {0}")]
    InvalidScale(f32),

    /// Tensor construction, access or lifecycle error.
    #[error(transparent)]
    Tensor(#[from] tinyml_core::Error),
}
