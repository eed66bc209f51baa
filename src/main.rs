//! hateoas-links CLI
//!
//! Command-line interface for inspecting parameter parsing and link output

use clap::Parser;
use hateoas_links::cli::{Cli, Runner};

fn main() {
    // Initialize logging (stderr, so JSON on stdout stays clean)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
