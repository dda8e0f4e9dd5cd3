//! Quantization Functions
//!
//! Symmetric max-abs quantization of `Float32` tensors into `Int8` tensors.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use tinyml_core::ElementKind;
use tinyml_tensor::Tensor;

use crate::calibration::{calibrate, float_data};
use crate::error::{QuantError, QuantResult};
use crate::types::{QuantConfig, QuantParams, Quantized, ZeroScalePolicy};

// =============================================================================
// Public API
// =============================================================================

/// Quantizes a `Float32` tensor to `Int8` with the default configuration.
///
/// # Example
/// ```rust
/// use tinyml_quant::quantize_tensor;
/// use tinyml_tensor::Tensor;
///
/// let input = Tensor::from_vec(1, 2, vec![1.0_f32, -0.25]).unwrap();
/// let output = quantize_tensor(&input).unwrap();
/// assert_eq!(output.to_vec::<i8>().unwrap(), vec![127, -32]);
/// ```
pub fn quantize_tensor(input: &Tensor) -> QuantResult<Tensor> {
    quantize_with_config(input, &QuantConfig::default()).map(Quantized::into_tensor)
}

/// Quantizes a `Float32` tensor, returning the output and its parameters.
///
/// # Errors
/// - `UnsupportedConversion` if the input is not `Float32`
/// - `DegenerateScale` if the scale is zero and the policy is `Reject`
/// - `Tensor(UseAfterRelease)` if the input has been released
pub fn quantize_with_config(input: &Tensor, config: &QuantConfig) -> QuantResult<Quantized> {
    let params = calibrate(input)?;
    tracing::info!(
        max_abs = params.max_abs,
        scale = params.scale,
        "quantization info"
    );

    let tensor = quantize_with_params(input, params, config)?;
    Ok(Quantized { tensor, params })
}

/// Quantizes a `Float32` tensor with externally supplied parameters.
///
/// Each element becomes `narrow(round(x / scale))`, rounding half away from
/// zero. With a scale smaller than `max_abs / 127` the rounded values leave
/// the `i8` range and the configured narrowing policy decides the result.
pub fn quantize_with_params(
    input: &Tensor,
    params: QuantParams,
    config: &QuantConfig,
) -> QuantResult<Tensor> {
    let data = float_data(input)?;

    if params.scale.is_nan() || params.scale < 0.0 {
        return Err(QuantError::InvalidScale(params.scale));
    }
    if params.is_degenerate() && config.zero_scale == ZeroScalePolicy::Reject {
        return Err(QuantError::DegenerateScale);
    }

    let mut output = Tensor::new(input.rows(), input.cols(), ElementKind::Int8)?;
    if params.is_degenerate() {
        tracing::debug!("zero scale, emitting all-zero tensor");
        return Ok(output);
    }

    let narrowing = config.narrowing;
    let out = output.as_slice_mut::<i8>()?;
    for (q, &x) in out.iter_mut().zip(data) {
        *q = narrowing.narrow((x / params.scale).round());
    }

    Ok(output)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Narrowing;

    fn sample() -> Tensor {
        Tensor::from_vec(2, 3, vec![-0.5_f32, 1.2, 0.0, 3.5, -2.1, 0.8]).unwrap()
    }

    #[test]
    fn test_quantize_sample() {
        let q = quantize_with_config(&sample(), &QuantConfig::default()).unwrap();

        assert_eq!(q.params.max_abs, 3.5);
        assert!((q.params.scale - 0.027_559).abs() < 1e-6);
        assert_eq!(q.tensor.shape(), (2, 3));
        assert_eq!(q.tensor.kind(), ElementKind::Int8);
        assert_eq!(
            q.tensor.to_vec::<i8>().unwrap(),
            vec![-18, 44, 0, 127, -76, 29]
        );
    }

    #[test]
    fn test_quantize_leaves_input_untouched() {
        let input = sample();
        let before = input.to_vec::<f32>().unwrap();
        quantize_tensor(&input).unwrap();
        assert_eq!(input.to_vec::<f32>().unwrap(), before);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // scale = 1.0, so x / scale is exact
        let input = Tensor::from_vec(1, 5, vec![127.0_f32, 2.5, -2.5, 0.5, -0.5]).unwrap();
        let output = quantize_tensor(&input).unwrap();
        assert_eq!(output.to_vec::<i8>().unwrap(), vec![127, 3, -3, 1, -1]);
    }

    #[test]
    fn test_unsupported_input_kind() {
        for kind in [ElementKind::Int8, ElementKind::Float16Container] {
            let input = Tensor::new(2, 2, kind).unwrap();
            assert_eq!(
                quantize_tensor(&input).unwrap_err(),
                QuantError::UnsupportedConversion {
                    from: kind,
                    to: ElementKind::Int8,
                }
            );
        }
    }

    #[test]
    fn test_with_params_wraps() {
        let input = Tensor::from_vec(1, 2, vec![2.0_f32, -2.0]).unwrap();
        let params = QuantParams::with_scale(0.01);

        let wrapped = quantize_with_params(&input, params, &QuantConfig::default()).unwrap();
        assert_eq!(wrapped.to_vec::<i8>().unwrap(), vec![-56, 56]);

        let config = QuantConfig::default().narrowing(Narrowing::Saturate);
        let saturated = quantize_with_params(&input, params, &config).unwrap();
        assert_eq!(saturated.to_vec::<i8>().unwrap(), vec![127, -128]);
    }

    #[test]
    fn test_with_params_wraps_huge_values() {
        let input = Tensor::from_vec(1, 3, vec![1e10_f32, -1e10, 300.0]).unwrap();
        let params = QuantParams::with_scale(1.0);

        let wrapped = quantize_with_params(&input, params, &QuantConfig::default()).unwrap();
        assert_eq!(wrapped.to_vec::<i8>().unwrap(), vec![0, 0, 44]);
    }

    #[test]
    fn test_with_params_invalid_scale() {
        let input = sample();
        let config = QuantConfig::default();

        assert_eq!(
            quantize_with_params(&input, QuantParams::with_scale(-1.0), &config).unwrap_err(),
            QuantError::InvalidScale(-1.0)
        );
        assert!(matches!(
            quantize_with_params(&input, QuantParams::with_scale(f32::NAN), &config),
            Err(QuantError::InvalidScale(_))
        ));
    }

    #[test]
    fn test_zero_input_policies() {
        let input = Tensor::new(3, 4, ElementKind::Float32).unwrap();

        let q = quantize_with_config(&input, &QuantConfig::default()).unwrap();
        assert_eq!(q.params.scale, 0.0);
        assert_eq!(q.tensor.shape(), (3, 4));
        assert!(q.tensor.as_slice::<i8>().unwrap().iter().all(|&v| v == 0));

        let config = QuantConfig::default().zero_scale(ZeroScalePolicy::Reject);
        assert_eq!(
            quantize_with_config(&input, &config).unwrap_err(),
            QuantError::DegenerateScale
        );
    }

    #[test]
    fn test_tiny_subnormal_scale_is_degenerate() {
        // 50 ulp / 127 rounds to a zero scale although max_abs is not zero
        let input = Tensor::from_vec(1, 1, vec![f32::from_bits(50)]).unwrap();
        let params = calibrate(&input).unwrap();
        assert!(params.max_abs > 0.0);
        assert!(params.is_degenerate());

        let config = QuantConfig::default().zero_scale(ZeroScalePolicy::Reject);
        assert_eq!(
            quantize_with_config(&input, &config).unwrap_err(),
            QuantError::DegenerateScale
        );
        assert_eq!(quantize_tensor(&input).unwrap().to_vec::<i8>().unwrap(), vec![0]);
    }
}
