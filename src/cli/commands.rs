//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - check: run the checker once over the whole file set
//! - changed: run the checker once per changed file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stylegate - a concurrent style-check quality gate
#[derive(Parser, Debug)]
#[command(name = "stylegate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the whole file set with a single checker invocation
    Check {
        /// Files to check
        files: Vec<PathBuf>,

        /// Maximum checker processes in flight
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Batch timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Check each changed file with its own checker invocation
    Changed {
        /// Changed files, in the order supplied by the discovery step
        files: Vec<PathBuf>,

        /// Maximum checker processes in flight
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Batch timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["stylegate", "check", "a.rs", "b.rs"]).unwrap();
        match cli.command {
            Commands::Check { files, jobs, timeout } => {
                assert_eq!(files.len(), 2);
                assert!(jobs.is_none());
                assert!(timeout.is_none());
            }
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_parse_changed_with_overrides() {
        let cli = Cli::try_parse_from(["stylegate", "changed", "-j", "4", "-t", "30", "a.rs"]).unwrap();
        match cli.command {
            Commands::Changed { files, jobs, timeout } => {
                assert_eq!(files, vec![PathBuf::from("a.rs")]);
                assert_eq!(jobs, Some(4));
                assert_eq!(timeout, Some(30));
            }
            _ => panic!("expected changed subcommand"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["stylegate", "check", "a.rs", "--verbose", "--config", "gate.yml"]).unwrap();
        assert!(cli.is_verbose());
        assert_eq!(cli.config, Some(PathBuf::from("gate.yml")));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["stylegate"]).is_err());
    }
}
