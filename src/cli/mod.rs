//! CLI module
//!
//! Command-line interface for inspecting parameter parsing and link output.
//!
//! # Commands
//!
//! - `parse` - Show the parsed query parameters of a URL
//! - `links` - Show the navigation links generated for a URL

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
