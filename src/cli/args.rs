//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// runenv - Runtime environment detection and configuration value reading.
#[derive(Debug, Parser)]
#[command(name = "runenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Overlay variables from a dotenv file on top of the process environment
    #[arg(long, global = true, env = "RUNENV_ENV_FILE", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Deployment marker read on Azure Functions (default: ../deployments/active)
    #[arg(
        long,
        global = true,
        env = "RUNENV_DEPLOYMENT_MARKER",
        value_name = "PATH"
    )]
    pub deployment_marker: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify the runtime environment (default if no command specified)
    Detect(DetectArgs),

    /// Print the deployed version (empty when local)
    Version,

    /// Print the service name
    ServiceName,

    /// Read and decode a configuration variable
    Read(ReadArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `read` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ReadArgs {
    /// Variable name
    pub name: String,

    /// Fail if the variable is unset or empty
    #[arg(long)]
    pub required: bool,

    /// Parse the value as JSON and pretty-print it
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_none() {
        let cli = Cli::parse_from(["runenv"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn parses_detect_json() {
        let cli = Cli::parse_from(["runenv", "detect", "--json"]);
        match cli.command {
            Some(Commands::Detect(args)) => assert!(args.json),
            other => panic!("Expected Detect command, got {other:?}"),
        }
    }

    #[test]
    fn parses_read_flags() {
        let cli = Cli::parse_from(["runenv", "read", "SETTINGS", "--required", "--json"]);
        match cli.command {
            Some(Commands::Read(args)) => {
                assert_eq!(args.name, "SETTINGS");
                assert!(args.required);
                assert!(args.json);
            }
            other => panic!("Expected Read command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "runenv",
            "version",
            "--env-file",
            ".env",
            "--deployment-marker",
            "/srv/deployments/active",
        ]);
        assert_eq!(cli.env_file, Some(PathBuf::from(".env")));
        assert_eq!(
            cli.deployment_marker,
            Some(PathBuf::from("/srv/deployments/active"))
        );
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn parses_service_name() {
        let cli = Cli::parse_from(["runenv", "service-name"]);
        assert!(matches!(cli.command, Some(Commands::ServiceName)));
    }
}
