//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, DetectArgs};
use crate::env::{EnvFileParser, EnvLayer, LayeredEnv, ReadEnv};
use crate::environment::Classifier;
use crate::error::Result;
use crate::value::ValueReader;

use super::completions::CompletionsCommand;
use super::detect::DetectCommand;
use super::read::ReadCommand;
use super::service_name::ServiceNameCommand;
use super::version::VersionCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<E = LayeredEnv> {
    env: E,
    deployment_marker: Option<PathBuf>,
}

impl CommandDispatcher<LayeredEnv> {
    /// Build a dispatcher from the global flags.
    ///
    /// `--env-file` is layered over the process environment and must exist.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut env = LayeredEnv::system();
        if let Some(path) = &cli.env_file {
            let vars = EnvFileParser::load(path)?;
            tracing::debug!(path = %path.display(), count = vars.len(), "overlaying env file");
            env.push(EnvLayer::from_vars(path.display().to_string(), vars));
        }
        let mut dispatcher = Self::new(env);
        dispatcher.deployment_marker = cli.deployment_marker.clone();
        Ok(dispatcher)
    }
}

impl<E: ReadEnv + Clone> CommandDispatcher<E> {
    /// Create a dispatcher over a variable source.
    pub fn new(env: E) -> Self {
        Self {
            env,
            deployment_marker: None,
        }
    }

    /// Override the deployment marker path.
    pub fn with_deployment_marker(mut self, path: impl Into<PathBuf>) -> Self {
        self.deployment_marker = Some(path.into());
        self
    }

    fn classifier(&self) -> Classifier<E> {
        let classifier = Classifier::new(self.env.clone());
        match &self.deployment_marker {
            Some(path) => classifier.with_deployment_marker(path),
            None => classifier,
        }
    }

    fn reader(&self) -> ValueReader<E> {
        ValueReader::new(self.env.clone())
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<()> {
        match &cli.command {
            Some(Commands::Detect(args)) => {
                DetectCommand::new(self.classifier(), args.clone()).execute(out)
            }
            Some(Commands::Version) => VersionCommand::new(self.classifier()).execute(out),
            Some(Commands::ServiceName) => {
                ServiceNameCommand::new(self.classifier()).execute(out)
            }
            Some(Commands::Read(args)) => {
                ReadCommand::new(self.reader(), args.clone()).execute(out)
            }
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(out)
            }
            None => DetectCommand::new(self.classifier(), DetectArgs::default()).execute(out),
        }
    }
}
