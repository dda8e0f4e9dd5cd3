//! Display - Human-Readable Tensor Rendering
//!
//! Rendering lives outside the tensor so construction and quantization stay
//! free of I/O. Callers wrap a tensor in [`TensorDisplay`] (or call
//! [`render`]) after they receive it.
//!
//! Output format:
//! ```text
//! --- Tensor (Type: 0, Size: 2x3) ---
//! -0.5000	1.2000	0.0000
//! 3.5000	-2.1000	0.8000
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use core::fmt;

use tinyml_core::error::Result;
use tinyml_core::storage::Storage;

use crate::tensor::Tensor;

/// Default number of decimals for floating point elements.
pub const DEFAULT_PRECISION: usize = 4;

// =============================================================================
// TensorDisplay
// =============================================================================

/// Borrowed view of a live tensor that implements [`fmt::Display`].
pub struct TensorDisplay<'a> {
    tensor: &'a Tensor,
    storage: &'a Storage,
    precision: usize,
}

impl<'a> TensorDisplay<'a> {
    /// Wraps a tensor for display, failing if it has been released.
    pub fn new(tensor: &'a Tensor) -> Result<Self> {
        Ok(Self {
            tensor,
            storage: tensor.storage()?,
            precision: DEFAULT_PRECISION,
        })
    }

    /// Sets the number of decimals used for floating point elements.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, start: usize, end: usize) -> fmt::Result {
        let p = self.precision;
        match self.storage {
            Storage::F32(data) => data[start..end]
                .iter()
                .try_for_each(|v| write!(f, "{v:.p$}\t")),
            Storage::F16(data) => data[start..end]
                .iter()
                .try_for_each(|v| write!(f, "{:.p$}\t", v.to_f32())),
            Storage::I8(data) => data[start..end]
                .iter()
                .try_for_each(|v| write!(f, "{v}\t")),
        }
    }
}

impl fmt::Display for TensorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.tensor.shape();
        writeln!(
            f,
            "--- Tensor (Type: {}, Size: {}x{}) ---",
            self.tensor.kind().tag(),
            rows,
            cols
        )?;
        for i in 0..rows {
            self.write_row(f, i * cols, (i + 1) * cols)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders a tensor to a string with the default precision.
pub fn render(tensor: &Tensor) -> Result<String> {
    Ok(TensorDisplay::new(tensor)?.to_string())
}

// =============================================================================
// Tests
// =============================================================================
