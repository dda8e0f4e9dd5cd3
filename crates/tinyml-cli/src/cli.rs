//! CLI - Command Line Interface Definitions
//!
//! Defines the CLI structure using clap derive macros.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// TinyML - 2-D tensors and symmetric Int8 quantization
#[derive(Parser, Debug)]
#[command(
    name = "tinyml",
    author = "AutomataNexus Development Team",
    version,
    about = "TinyML tensor CLI - Quantize Float32 tensors to Int8"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quantize the built-in 2x3 sample tensor
    Demo(DemoArgs),

    /// Quantize a tensor given on the command line
    Quantize(QuantizeArgs),

    /// Write a default tinyml.toml
    Init(InitArgs),
}

/// Options shared by every quantizing command
#[derive(Args, Debug, Clone, Default)]
pub struct QuantOptions {
    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Clamp out-of-range values instead of wrapping them
    #[arg(long)]
    pub saturate: bool,

    /// Fail on an all-zero input instead of emitting zeros
    #[arg(long)]
    pub reject_zero: bool,

    /// Decimals used when printing floating point tensors
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Arguments for the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    #[command(flatten)]
    pub options: QuantOptions,
}

/// Arguments for the quantize command
#[derive(Args, Debug)]
pub struct QuantizeArgs {
    /// Number of rows
    #[arg(short, long)]
    pub rows: usize,

    /// Number of columns
    #[arg(long)]
    pub cols: usize,

    /// Row-major values, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<f32>,

    #[command(flatten)]
    pub options: QuantOptions,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(short, long, default_value = "tinyml.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
