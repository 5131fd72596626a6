//! Command-line interface for runenv.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//!
//! Library calls return errors. This layer is where they become fatal: the
//! binary prints the error and exits non-zero.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, DetectArgs, ReadArgs};
pub use commands::{Command, CommandDispatcher};
