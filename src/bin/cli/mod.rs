//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution and file discovery
//! - output: text, table and JSON output

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
