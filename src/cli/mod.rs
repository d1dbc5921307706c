//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{MatchCommand, ValidateCommand};
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

/// Evaluate pipeline include/exclude conditions
#[derive(Debug, Parser, Clone)]
#[command(name = "when")]
#[command(author = "Pipeline Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Evaluate pipeline include/exclude conditions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Parse a conditions block and print its normalized form
    Validate(ValidateCommand),

    /// Check event values against a conditions block
    Match(MatchCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Log filter: `--verbose` forces debug, otherwise `RUST_LOG` or info
    pub fn log_filter(&self) -> EnvFilter {
        if self.verbose {
            return EnvFilter::new("debug");
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from([
            "when", "match", "--file", "when.yml", "--value", "branch=main", "--value", "event=push",
        ])
        .unwrap();

        match cli.command {
            Command::Match(cmd) => {
                assert_eq!(cmd.file, "when.yml");
                assert_eq!(
                    cmd.value,
                    vec![
                        (Dimension::Branch, "main".to_string()),
                        (Dimension::Event, "push".to_string()),
                    ]
                );
            }
            other => panic!("Expected match command, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_dimension_is_rejected() {
        let result = Cli::try_parse_from(["when", "match", "--file", "when.yml", "--value", "branches=main"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_match_requires_a_value() {
        assert!(Cli::try_parse_from(["when", "match", "--file", "when.yml"]).is_err());
    }

    #[test]
    fn test_global_verbose_flag() {
        let cli = Cli::try_parse_from(["when", "validate", "-f", "when.yml", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_filter().to_string(), "debug");
    }
}
