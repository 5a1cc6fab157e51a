//! CLI module
//!
//! Command-line interface for running searches.
//!
//! # Commands
//!
//! - `search` - Fetch result pages for a query and print the records

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
