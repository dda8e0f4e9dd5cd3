//! Demo - Built-in Sample Pipeline
//!
//! Quantizes the 2x3 sample tensor `[-0.5, 1.2, 0.0, 3.5, -2.1, 0.8]`.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use tinyml_tensor::Tensor;

use super::utils::{print_header, run_pipeline};
use crate::cli::DemoArgs;
use crate::config::TinymlConfig;
use crate::error::CliResult;

/// Sample values, row-major 2x3
pub const SAMPLE_DATA: [f32; 6] = [-0.5, 1.2, 0.0, 3.5, -2.1, 0.8];

/// Execute the demo command
pub fn execute(args: DemoArgs, quiet: bool) -> CliResult<()> {
    let config = TinymlConfig::resolve(&args.options)?;

    if !quiet {
        print_header("TinyML Tensor Demo");
    }

    let input = Tensor::from_slice(2, 3, &SAMPLE_DATA)?;

    run_pipeline(input, &config, quiet)
}
