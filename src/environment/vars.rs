//! Names of the environment variables the classifier reads.

/// Manual version override.
pub const VERSION: &str = "VERSION";
/// Cloud Run service revision.
pub const K_REVISION: &str = "K_REVISION";
/// Cloud Run job execution.
pub const CLOUD_RUN_EXECUTION: &str = "CLOUD_RUN_EXECUTION";
/// Cloud Run service configuration.
pub const K_CONFIGURATION: &str = "K_CONFIGURATION";
/// Cloud Run service name.
pub const K_SERVICE: &str = "K_SERVICE";
/// Cloud Run job name.
pub const CLOUD_RUN_JOB: &str = "CLOUD_RUN_JOB";
/// Azure Functions site name.
pub const APPSETTING_WEBSITE_SITE_NAME: &str = "APPSETTING_WEBSITE_SITE_NAME";
/// Set inside every Kubernetes pod.
pub const KUBERNETES_SERVICE_HOST: &str = "KUBERNETES_SERVICE_HOST";
/// Fly.io application name.
pub const FLY_APP_NAME: &str = "FLY_APP_NAME";
/// Jenkins build number.
pub const BUILD_ID: &str = "BUILD_ID";
/// Generic CI marker (GitHub Actions, GitLab, CircleCI, ...).
pub const CI: &str = "CI";

/// Version sources, highest precedence first.
pub const VERSION_CHAIN: [&str; 3] = [VERSION, K_REVISION, CLOUD_RUN_EXECUTION];

/// Service name sources, highest precedence first.
pub const SERVICE_NAME_CHAIN: [&str; 4] = [
    K_SERVICE,
    CLOUD_RUN_JOB,
    APPSETTING_WEBSITE_SITE_NAME,
    FLY_APP_NAME,
];
