//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and writes its output to
//! the writer it is given, so commands can be tested without a terminal.
//! [`CommandDispatcher`] builds the variable source once from the global
//! flags and routes subcommands to their implementations.

pub mod completions;
pub mod detect;
pub mod dispatcher;
pub mod read;
pub mod service_name;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher};
