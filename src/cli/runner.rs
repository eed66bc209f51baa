//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, LinkConfig};
use crate::error::Result;
use crate::links::{LinkBuilder, RequestContext};
use crate::params::ParameterParser;
use serde::Serialize;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the command and return its JSON output
    pub fn execute(&self) -> Result<String> {
        let config = self.load_config()?;
        match &self.cli.command {
            Commands::Parse { url } => self.parse(&config, url),
            Commands::Links {
                url,
                has_next,
                next_last,
                prev_last,
            } => self.links(
                &config,
                url,
                *has_next,
                next_last.as_deref(),
                prev_last.as_deref(),
            ),
        }
    }

    fn load_config(&self) -> Result<LinkConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(LinkConfig::default()),
        }
    }

    fn parse(&self, config: &LinkConfig, url: &str) -> Result<String> {
        let url = Url::parse(url)?;
        let params = ParameterParser::new(config).parse(url.query_pairs());
        self.to_json(&params)
    }

    fn links(
        &self,
        config: &LinkConfig,
        url: &str,
        has_next: bool,
        next_last: Option<&str>,
        prev_last: Option<&str>,
    ) -> Result<String> {
        let url = Url::parse(url)?;
        let ctx = RequestContext::from_url(&url)?;

        let mut params = ParameterParser::new(config).parse(url.query_pairs());
        if let Some(cursor) = next_last {
            params.set_next_last(cursor);
        }
        if let Some(cursor) = prev_last {
            params.set_prev_last(cursor);
        }

        tracing::debug!(?ctx, has_next, "Generating links");
        let links = LinkBuilder::new(config).build(&ctx, &params, has_next);
        self.to_json(&links)
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}
