//! Runtime environment classification.
//!
//! Answers "what kind of environment am I running in": local or deployed,
//! CI or not, and which cloud or orchestration platform. Every predicate is
//! an independent read of the current variables. Nothing is cached, so two
//! calls may disagree if the environment changes in between.
//!
//! Version resolution order:
//!
//! 1. `VERSION` (manual override)
//! 2. `K_REVISION` (Cloud Run service revision)
//! 3. `CLOUD_RUN_EXECUTION` (Cloud Run job execution)
//! 4. On Azure Functions, the `../deployments/active` marker file
//! 5. Empty, meaning a local environment
//!
//! The free functions in this module read the process environment. Use a
//! [`Classifier`] with an injected [`ReadEnv`](crate::env::ReadEnv) source
//! for anything else.

pub mod classifier;
pub mod report;
pub mod vars;

pub use classifier::{Classifier, DEFAULT_DEPLOYMENT_MARKER};
pub use report::{EnvironmentReport, Platform};

use crate::error::Result;

/// The deployed version, or empty when running locally.
pub fn version() -> Result<String> {
    Classifier::system().version()
}

/// True when no deployed version signal is present.
pub fn is_local() -> Result<bool> {
    Classifier::system().is_local()
}

/// True when a deployed version signal is present.
pub fn is_production() -> Result<bool> {
    Classifier::system().is_production()
}

/// True when running as a Jenkins build step.
pub fn is_jenkins() -> bool {
    Classifier::system().is_jenkins()
}

/// True when running under Jenkins or any CI that sets `CI`.
pub fn is_ci() -> bool {
    Classifier::system().is_ci()
}

/// True when running as a Cloud Run service or job.
pub fn is_cloud_run() -> bool {
    Classifier::system().is_cloud_run()
}

/// True when running inside an Azure Function app.
pub fn is_azure_function() -> bool {
    Classifier::system().is_azure_function()
}

/// True when running inside a Kubernetes pod.
pub fn is_kubernetes() -> bool {
    Classifier::system().is_kubernetes()
}

/// The service name from platform variables, or the host name.
pub fn service_name() -> Result<String> {
    Classifier::system().service_name()
}
