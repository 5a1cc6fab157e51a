//! CLI commands and argument parsing

use crate::search::ContentFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Search listing extractor CLI
#[derive(Parser, Debug)]
#[command(name = "tubelist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Interface language, overrides the config file
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Content country, overrides the config file
    #[arg(long, global = true)]
    pub country: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and print the results
    Search {
        /// Search terms
        query: String,

        /// Restrict results to one kind
        #[arg(long, default_value = "all")]
        filter: ContentFilter,

        /// Maximum number of pages to fetch (at least 1)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
