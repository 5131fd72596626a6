//! A one-shot summary of every classification.

use serde::Serialize;
use std::fmt;

/// Hosting platform.
///
/// When several platforms' variables are present, the first variant in
/// declaration order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Google Cloud Run service or job.
    CloudRun,
    /// Azure Functions app.
    AzureFunction,
    /// Kubernetes pod.
    Kubernetes,
    /// Fly.io machine.
    Fly,
    /// None of the above.
    Unknown,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CloudRun => write!(f, "cloud-run"),
            Self::AzureFunction => write!(f, "azure-function"),
            Self::Kubernetes => write!(f, "kubernetes"),
            Self::Fly => write!(f, "fly"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Every classifier answer, computed from a single version resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentReport {
    pub version: String,
    pub service_name: String,
    pub platform: Platform,
    pub local: bool,
    pub production: bool,
    pub jenkins: bool,
    pub ci: bool,
    pub cloud_run: bool,
    pub azure_function: bool,
    pub kubernetes: bool,
}
