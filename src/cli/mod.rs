//! CLI interface and argument parsing
//!
//! This module turns a config file into a command line with one subcommand
//! per public task.

pub mod app;

// Re-export main types
pub use app::*;
