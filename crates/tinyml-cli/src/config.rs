//! Config - Configuration File Handling
//!
//! Loads `tinyml.toml`. Every section is optional and command line flags
//! override whatever the file sets.
//!
//! ```toml
//! [quant]
//! narrowing = "wrap"      # or "saturate"
//! zero_scale = "zeros"    # or "reject"
//!
//! [display]
//! precision = 4
//! ```
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use serde::{Deserialize, Serialize};
use std::path::Path;

use tinyml_quant::{Narrowing, QuantConfig, ZeroScalePolicy};
use tinyml_tensor::display::DEFAULT_PRECISION;

use crate::cli::QuantOptions;
use crate::error::{CliError, CliResult};

// =============================================================================
// Configuration
// =============================================================================

/// Top-level configuration (tinyml.toml)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TinymlConfig {
    /// Quantizer policies
    #[serde(default)]
    pub quant: QuantConfig,

    /// Tensor printing
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimals for floating point elements
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl TinymlConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: TinymlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CliResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective configuration: file first, then flags
    pub fn resolve(options: &QuantOptions) -> CliResult<Self> {
        let mut config = match &options.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if options.saturate {
            config.quant.narrowing = Narrowing::Saturate;
        }
        if options.reject_zero {
            config.quant.zero_scale = ZeroScalePolicy::Reject;
        }
        if let Some(precision) = options.precision {
            config.display.precision = precision;
        }

        tracing::debug!(
            narrowing = %config.quant.narrowing,
            zero_scale = %config.quant.zero_scale,
            precision = config.display.precision,
            "resolved configuration"
        );
        Ok(config)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TinymlConfig::default();
        assert_eq!(config.quant, QuantConfig::default());
        assert_eq!(config.display.precision, 4);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = TinymlConfig::default();
        config.quant.narrowing = Narrowing::Saturate;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: TinymlConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config() {
        let parsed: TinymlConfig = toml::from_str("[quant]\nzero_scale = \"reject\"\n").unwrap();
        assert_eq!(parsed.quant.zero_scale, ZeroScalePolicy::Reject);
        assert_eq!(parsed.quant.narrowing, Narrowing::Wrap);
        assert_eq!(parsed.display.precision, 4);
    }

    #[test]
    fn test_resolve_flags_override_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tinyml.toml");
        std::fs::write(&path, "[display]\nprecision = 2\n").unwrap();

        let options = QuantOptions {
            config: Some(path),
            saturate: true,
            reject_zero: false,
            precision: None,
        };
        let config = TinymlConfig::resolve(&options).unwrap();
        assert_eq!(config.quant.narrowing, Narrowing::Saturate);
        assert_eq!(config.display.precision, 2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tinyml.toml");

        let mut config = TinymlConfig::default();
        config.display.precision = 6;
        config.save(&path).unwrap();

        assert_eq!(TinymlConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tinyml.toml");
        std::fs::write(&path, "[quant]\nnarrowing = \"round\"\n").unwrap();

        assert!(matches!(
            TinymlConfig::load(&path),
            Err(CliError::Config(_))
        ));
    }
}
