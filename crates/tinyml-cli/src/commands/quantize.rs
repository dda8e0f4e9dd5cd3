//! Quantize - Quantize User-Supplied Values
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use tinyml_tensor::Tensor;

use super::utils::{print_header, print_kv, run_pipeline};
use crate::cli::QuantizeArgs;
use crate::config::TinymlConfig;
use crate::error::CliResult;

/// Execute the quantize command
pub fn execute(args: QuantizeArgs, quiet: bool) -> CliResult<()> {
    let config = TinymlConfig::resolve(&args.options)?;
    let input = Tensor::from_vec(args.rows, args.cols, args.values)?;

    if !quiet {
        print_header("TinyML Quantize");
        print_kv("Shape", &format!("{}x{}", input.rows(), input.cols()));
        print_kv("Narrowing", &config.quant.narrowing.to_string());
        print_kv("Zero scale", &config.quant.zero_scale.to_string());
    }

    run_pipeline(input, &config, quiet)
}
