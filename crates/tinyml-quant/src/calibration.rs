//! Calibration for Quantization
//!
//! Derives the symmetric scale of a `Float32` tensor without producing any
//! output tensor.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use tinyml_core::{ElementKind, Storage};
use tinyml_tensor::Tensor;

use crate::error::{QuantError, QuantResult};
use crate::types::QuantParams;

/// Borrows the `f32` buffer of a quantizable tensor.
pub(crate) fn float_data(input: &Tensor) -> QuantResult<&[f32]> {
    match input.storage()? {
        Storage::F32(data) => Ok(data.as_slice()),
        other => Err(QuantError::UnsupportedConversion {
            from: other.kind(),
            to: ElementKind::Int8,
        }),
    }
}

/// Returns the largest absolute value, or 0 for an empty slice.
///
/// NaN never wins the comparison, so it does not raise the result.
pub fn max_abs(data: &[f32]) -> f32 {
    data.iter().map(|x| x.abs()).fold(0.0f32, f32::max)
}

/// Computes `max_abs` and `scale = max_abs / 127` for a `Float32` tensor.
///
/// # Errors
/// `UnsupportedConversion` for any other kind, `Tensor(UseAfterRelease)` for a
/// released tensor.
pub fn calibrate(input: &Tensor) -> QuantResult<QuantParams> {
    let data = float_data(input)?;
    Ok(QuantParams::from_max_abs(max_abs(data)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tinyml_core::Error;

    #[test]
    fn test_max_abs() {
        assert_eq!(max_abs(&[-0.5, 1.2, 0.0, 3.5, -2.1, 0.8]), 3.5);
        assert_eq!(max_abs(&[-4.0, 1.0]), 4.0);
        assert_eq!(max_abs(&[]), 0.0);
        assert_eq!(max_abs(&[f32::NAN, -2.0]), 2.0);
    }

    #[test]
    fn test_calibrate() {
        let t = Tensor::from_vec(2, 3, vec![-0.5_f32, 1.2, 0.0, 3.5, -2.1, 0.8]).unwrap();
        let params = calibrate(&t).unwrap();

        assert_eq!(params.max_abs, 3.5);
        assert!((params.scale - 3.5 / 127.0).abs() < 1e-9);
    }

    #[test]
    fn test_calibrate_rejects_non_float() {
        let t = Tensor::new(2, 2, ElementKind::Int8).unwrap();
        assert_eq!(
            calibrate(&t).unwrap_err(),
            QuantError::UnsupportedConversion {
                from: ElementKind::Int8,
                to: ElementKind::Int8,
            }
        );
    }

    #[test]
    fn test_calibrate_released() {
        let mut t = Tensor::new(2, 2, ElementKind::Float32).unwrap();
        t.release().unwrap();
        assert_eq!(
            calibrate(&t).unwrap_err(),
            QuantError::Tensor(Error::UseAfterRelease)
        );
    }
}
