//! TinyML CLI - Command Line Interface for TinyML Tensors
//!
//! The main entry point for the `tinyml` command-line tool.
//!
//! # Commands
//! - `tinyml demo` - Quantize the built-in sample tensor
//! - `tinyml quantize` - Quantize values given on the command line
//! - `tinyml init` - Write a default `tinyml.toml`
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::needless_pass_by_value)]

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;

use cli::{Cli, Commands};
use error::CliResult;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Demo(args) => commands::demo::execute(args, cli.quiet),
        Commands::Quantize(args) => commands::quantize::execute(args, cli.quiet),
        Commands::Init(args) => commands::init::execute(args, cli.quiet),
    }
}

/// Install the stderr tracing subscriber; `RUST_LOG` overrides the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
