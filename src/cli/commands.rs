//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect query parsing and HATEOAS link generation
#[derive(Parser, Debug)]
#[command(name = "hateoas-links")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the query string of a URL
    Parse {
        /// Request URL (e.g. "https://localhost:5555/api/v1/users?page=2")
        url: String,
    },

    /// Generate navigation links for a URL
    Links {
        /// Request URL; scheme, host and path form the link base
        url: String,

        /// More results exist beyond this page
        #[arg(long)]
        has_next: bool,

        /// Cursor for the next link
        #[arg(long)]
        next_last: Option<String>,

        /// Cursor for the prev link
        #[arg(long)]
        prev_last: Option<String>,
    },
}
