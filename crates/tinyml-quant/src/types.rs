//! Quantization Types
//!
//! Parameters, policies and results of symmetric Int8 quantization.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use std::fmt;

use serde::{Deserialize, Serialize};
use tinyml_tensor::Tensor;

use crate::INT8_QMAX;

// =============================================================================
// Quantization Parameters
// =============================================================================

/// Scale parameters for one quantization pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantParams {
    /// Largest absolute input value.
    pub max_abs: f32,
    /// Divisor mapping input values onto the Int8 range.
    pub scale: f32,
}

impl QuantParams {
    /// Derives the symmetric scale from a maximum absolute value.
    pub fn from_max_abs(max_abs: f32) -> Self {
        Self {
            max_abs,
            scale: max_abs / INT8_QMAX,
        }
    }

    /// Creates parameters from an explicit scale.
    pub fn with_scale(scale: f32) -> Self {
        Self {
            max_abs: scale * INT8_QMAX,
            scale,
        }
    }

    /// Returns true if the scale is zero.
    pub fn is_degenerate(&self) -> bool {
        self.scale == 0.0
    }
}

impl fmt::Display for QuantParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Max Val: {:.4}, Scale: {:.4}", self.max_abs, self.scale)
    }
}

// =============================================================================
// Policies
// =============================================================================

/// How a rounded value outside `[-128, 127]` is narrowed to `i8`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Narrowing {
    /// Keep the low 8 bits (two's complement truncation), so 200 becomes -56.
    #[default]
    Wrap,
    /// Clamp to `[-128, 127]`.
    Saturate,
}

impl Narrowing {
    /// Narrows an already rounded value.
    ///
    /// Non-finite values narrow to 0 under both policies. `Wrap` reduces the
    /// value modulo 256 first, so any magnitude of at least 2^31 (always a
    /// multiple of 256 in `f32`) also narrows to 0.
    pub fn narrow(self, rounded: f32) -> i8 {
        match self {
            Narrowing::Wrap if !rounded.is_finite() => 0,
            // `%` is exact on f32 and keeps the sign, so the result fits in i32
            Narrowing::Wrap => (rounded % 256.0) as i32 as i8,
            Narrowing::Saturate => rounded as i8,
        }
    }
}

impl fmt::Display for Narrowing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narrowing::Wrap => write!(f, "wrap"),
            Narrowing::Saturate => write!(f, "saturate"),
        }
    }
}

/// What to do when `max_abs` is zero and the scale would be zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroScalePolicy {
    /// Emit an all-zero tensor and report a scale of zero.
    #[default]
    Zeros,
    /// Fail with `DegenerateScale`.
    Reject,
}

impl fmt::Display for ZeroScalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroScalePolicy::Zeros => write!(f, "zeros"),
            ZeroScalePolicy::Reject => write!(f, "reject"),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Quantizer configuration.
///
/// The default reproduces an unchecked narrowing cast bit for bit and maps
/// an all-zero input to an all-zero output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantConfig {
    /// Narrowing policy for out-of-range values.
    pub narrowing: Narrowing,
    /// Policy for a zero scale.
    pub zero_scale: ZeroScalePolicy,
}

impl QuantConfig {
    /// Sets the narrowing policy.
    #[must_use]
    pub fn narrowing(mut self, narrowing: Narrowing) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Sets the zero-scale policy.
    #[must_use]
    pub fn zero_scale(mut self, policy: ZeroScalePolicy) -> Self {
        self.zero_scale = policy;
        self
    }
}

// =============================================================================
// Quantized Result
// =============================================================================

/// An Int8 tensor together with the parameters that produced it.
#[derive(Debug)]
pub struct Quantized {
    /// The Int8 output tensor.
    pub tensor: Tensor,
    /// Parameters used for this pass.
    pub params: QuantParams,
}

impl Quantized {
    /// Returns the output tensor, discarding the parameters.
    pub fn into_tensor(self) -> Tensor {
        self.tensor
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_max_abs() {
        let params = QuantParams::from_max_abs(3.5);
        assert!((params.scale - 0.027_559).abs() < 1e-6);
        assert!(!params.is_degenerate());
        assert!(QuantParams::from_max_abs(0.0).is_degenerate());
    }

    #[test]
    fn test_params_display() {
        let params = QuantParams::from_max_abs(3.5);
        assert_eq!(params.to_string(), "Max Val: 3.5000, Scale: 0.0276");
    }

    #[test]
    fn test_narrow_in_range() {
        for policy in [Narrowing::Wrap, Narrowing::Saturate] {
            assert_eq!(policy.narrow(127.0), 127);
            assert_eq!(policy.narrow(-128.0), -128);
            assert_eq!(policy.narrow(0.0), 0);
            assert_eq!(policy.narrow(f32::NAN), 0);
        }
    }

    #[test]
    fn test_narrow_out_of_range() {
        assert_eq!(Narrowing::Wrap.narrow(200.0), -56);
        assert_eq!(Narrowing::Wrap.narrow(-200.0), 56);
        assert_eq!(Narrowing::Wrap.narrow(128.0), -128);
        assert_eq!(Narrowing::Wrap.narrow(256.0), 0);
        assert_eq!(Narrowing::Wrap.narrow(-129.0), 127);
        assert_eq!(Narrowing::Wrap.narrow(1e10), 0);
        assert_eq!(Narrowing::Wrap.narrow(-1e10), 0);
        assert_eq!(Narrowing::Wrap.narrow(f32::INFINITY), 0);

        assert_eq!(Narrowing::Saturate.narrow(200.0), 127);
        assert_eq!(Narrowing::Saturate.narrow(-200.0), -128);
    }

    #[test]
    fn test_config_defaults() {
        let config = QuantConfig::default();
        assert_eq!(config.narrowing, Narrowing::Wrap);
        assert_eq!(config.zero_scale, ZeroScalePolicy::Zeros);

        let config = config
            .narrowing(Narrowing::Saturate)
            .zero_scale(ZeroScalePolicy::Reject);
        assert_eq!(config.narrowing, Narrowing::Saturate);
        assert_eq!(config.zero_scale, ZeroScalePolicy::Reject);
    }

    #[test]
    fn test_config_from_toml() {
        let config: QuantConfig = toml::from_str("narrowing = \"saturate\"").unwrap();
        assert_eq!(config.narrowing, Narrowing::Saturate);
        assert_eq!(config.zero_scale, ZeroScalePolicy::Zeros);

        let config: QuantConfig = toml::from_str("").unwrap();
        assert_eq!(config, QuantConfig::default());
    }
}
