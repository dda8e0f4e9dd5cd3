//! Commands - CLI Command Implementations
//!
//! This module contains the implementations for all CLI commands.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

pub mod demo;
pub mod init;
pub mod quantize;

// Re-export common utilities for commands
pub(crate) mod utils;
