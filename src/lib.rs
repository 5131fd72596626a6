//! runenv - Runtime environment detection and configuration value reading.
//!
//! Answers two questions for a host process: what kind of environment it
//! is running in (local, CI, Cloud Run, Azure Functions, Kubernetes, Fly.io),
//! and what the value of a configuration variable is once any `base64://`
//! wrapper has been removed.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface for the `runenv` binary
//! - [`env`] - Variable sources: process, in-memory, dotenv layers
//! - [`environment`] - Environment classification
//! - [`error`] - Error types and result aliases
//! - [`sys`] - Host facts that need a system call
//! - [`value`] - Reading and decoding configuration values
//!
//! # Example
//!
//! ```
//! use runenv::env::MapEnv;
//! use runenv::environment::Classifier;
//! use runenv::value::ValueReader;
//!
//! let env = MapEnv::new()
//!     .with("VERSION", "v1.2.3")
//!     .with("CI", "true")
//!     .with("SETTINGS", "base64://eyJhIjoxfQ==");
//!
//! let classifier = Classifier::new(env.clone());
//! assert_eq!(classifier.version().unwrap(), "v1.2.3");
//! assert!(classifier.is_ci());
//! assert!(!classifier.is_jenkins());
//!
//! let reader = ValueReader::new(env);
//! let settings: serde_json::Value = reader.must_read_json("SETTINGS").unwrap();
//! assert_eq!(settings["a"], 1);
//! ```
//!
//! The crate-level functions ([`version`], [`must_read`], ...) read the
//! process environment directly.

pub mod cli;
pub mod env;
pub mod environment;
pub mod error;
pub mod sys;
pub mod value;

pub use environment::{
    is_azure_function, is_ci, is_cloud_run, is_jenkins, is_kubernetes, is_local, is_production,
    service_name, version,
};
pub use error::{Result, RunenvError};
pub use value::{must_read, must_read_json, optional_read, optional_read_json};
