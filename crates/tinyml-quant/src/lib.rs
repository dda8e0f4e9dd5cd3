//! TinyML Quant - Symmetric Int8 Quantization
//!
//! Converts `Float32` tensors into `Int8` tensors with a single scale derived
//! from the maximum absolute value:
//!
//! - `max_abs = max |x|`
//! - `scale = max_abs / 127`
//! - `q = narrow(round(x / scale))`
//!
//! Zero always maps to zero. The scale is reported alongside the output but
//! never stored on the tensor; there is no dequantization path.
//!
//! # Example
//! ```rust
//! use tinyml_quant::quantize_tensor;
//! use tinyml_tensor::{ElementKind, Tensor};
//!
//! let input = Tensor::from_vec(2, 3, vec![-0.5_f32, 1.2, 0.0, 3.5, -2.1, 0.8]).unwrap();
//! let output = quantize_tensor(&input).unwrap();
//!
//! assert_eq!(output.kind(), ElementKind::Int8);
//! assert_eq!(output.to_vec::<i8>().unwrap(), vec![-18, 44, 0, 127, -76, 29]);
//! ```
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod calibration;
pub mod error;
pub mod quantize;
pub mod types;

pub use calibration::calibrate;
pub use error::{QuantError, QuantResult};
pub use quantize::{quantize_tensor, quantize_with_config, quantize_with_params};
pub use types::{Narrowing, QuantConfig, QuantParams, Quantized, ZeroScalePolicy};

// =============================================================================
// Constants
// =============================================================================

/// Largest magnitude the symmetric Int8 range maps `max_abs` onto.
pub const INT8_QMAX: f32 = 127.0;

// =============================================================================
// Tests
// =============================================================================
