//! Utils - Common Utilities for CLI Commands
//!
//! Shared output helpers and the tensor pipeline used by every quantizing
//! command.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use colored::Colorize;

use tinyml_quant::quantize_with_config;
use tinyml_tensor::{Tensor, TensorDisplay};

use crate::config::TinymlConfig;
use crate::error::CliResult;

// =============================================================================
// Output Formatting
// =============================================================================

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a header
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a tensor with the configured precision
pub fn print_tensor(tensor: &Tensor, precision: usize) -> CliResult<()> {
    let display = TensorDisplay::new(tensor)?.precision(precision);
    println!();
    print!("{display}");
    Ok(())
}

// =============================================================================
// Pipeline
// =============================================================================

/// Print, quantize, print, then release both tensors.
///
/// With `quiet` set nothing is printed; errors still propagate.
pub fn run_pipeline(mut input: Tensor, config: &TinymlConfig, quiet: bool) -> CliResult<()> {
    let precision = config.display.precision;
    if !quiet {
        print_tensor(&input, precision)?;
    }

    let quantized = quantize_with_config(&input, &config.quant)?;
    let mut output = quantized.tensor;

    if !quiet {
        println!();
        println!(
            "{} {}",
            "[Quantization Info]".cyan().bold(),
            quantized.params
        );
        print_tensor(&output, precision)?;
    }

    input.release()?;
    output.release()?;
    Ok(())
}
