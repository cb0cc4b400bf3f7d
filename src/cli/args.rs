//! CLI argument definitions using clap
//!
//! Commands:
//! - planstore serve [--config <path>] [--port <port>]
//! - planstore validate <file>
//! - planstore digest <file>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// planstore - validating, content-addressed store for plan documents
#[derive(Parser, Debug)]
#[command(name = "planstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a plan document file and exit
    Validate {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Print the content digest (ETag) of a plan document file
    Digest {
        /// Path to the JSON document
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["planstore", "serve", "--config", "p.json", "--port", "8080"])
            .unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, Some(PathBuf::from("p.json")));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["planstore", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { config: None, port: None }));
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from(["planstore", "validate", "plan.json"]).unwrap();
        assert!(matches!(cli.command, Command::Validate { ref file } if file == &PathBuf::from("plan.json")));
    }

    #[test]
    fn test_digest_requires_file() {
        assert!(Cli::try_parse_from(["planstore", "digest"]).is_err());
    }
}
