//! Error - CLI Error Types
//!
//! Defines error types for CLI operations.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use thiserror::Error;
use tinyml_quant::QuantError;

// =============================================================================
// Error Types
// =============================================================================

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tensor construction or access error
    #[error("Tensor error: {0}")]
    Tensor(#[from] tinyml_core::Error),

    /// Quantization error
    #[error("Quantization error: {0}")]
    Quant(#[from] QuantError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// Error Conversion
// =============================================================================

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e.to_string())
    }
}
