//! Environment variable sources.
//!
//! Everything in runenv reads variables through the [`ReadEnv`] trait so the
//! process environment can be swapped for a deterministic source in tests:
//!
//! - [`SystemEnv`] - the real process environment
//! - [`MapEnv`] - an in-memory map
//! - [`LayeredEnv`] - dotenv-style layers on top of another source
//! - any `Fn(&str) -> Result<String, VarError>` closure
//!
//! Sources are read-only. Nothing here mutates the process environment.

pub mod env_file;
pub mod layered;
pub mod read_env;

pub use env_file::EnvFileParser;
pub use layered::{EnvLayer, LayeredEnv};
pub use read_env::{MapEnv, ReadEnv, SystemEnv};
