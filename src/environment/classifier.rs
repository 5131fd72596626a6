//! The environment classifier.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use super::report::{EnvironmentReport, Platform};
use super::vars;
use crate::env::{ReadEnv, SystemEnv};
use crate::error::{Result, RunenvError};

/// Deployment marker written by Azure Functions deployments, relative to the
/// working directory.
pub const DEFAULT_DEPLOYMENT_MARKER: &str = "../deployments/active";

/// Classifies the runtime environment from a variable source.
///
/// # Example
///
/// ```
/// use runenv::env::MapEnv;
/// use runenv::environment::Classifier;
///
/// let env = MapEnv::new()
///     .with("K_SERVICE", "checkout")
///     .with("K_REVISION", "checkout-00042")
///     .with("K_CONFIGURATION", "checkout");
/// let classifier = Classifier::new(env);
///
/// assert_eq!(classifier.version().unwrap(), "checkout-00042");
/// assert_eq!(classifier.service_name().unwrap(), "checkout");
/// assert!(classifier.is_cloud_run());
/// assert!(classifier.is_production().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Classifier<E = SystemEnv> {
    env: E,
    deployment_marker: PathBuf,
    hostname: fn() -> io::Result<String>,
}

impl Classifier<SystemEnv> {
    /// Classifier over the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: ReadEnv> Classifier<E> {
    /// Classifier over an injected variable source.
    pub fn new(env: E) -> Self {
        Self {
            env,
            deployment_marker: PathBuf::from(DEFAULT_DEPLOYMENT_MARKER),
            hostname: crate::sys::hostname,
        }
    }

    /// Override where the Azure Functions deployment marker is read from.
    pub fn with_deployment_marker(mut self, path: impl Into<PathBuf>) -> Self {
        self.deployment_marker = path.into();
        self
    }

    /// The deployment marker path in use.
    pub fn deployment_marker(&self) -> &Path {
        &self.deployment_marker
    }

    /// Override how the host name is looked up for
    /// [`service_name`](Self::service_name).
    pub fn with_hostname(mut self, hostname: fn() -> io::Result<String>) -> Self {
        self.hostname = hostname;
        self
    }

    /// Resolve the deployed version.
    ///
    /// Returns an empty string when no version source is present. A missing
    /// deployment marker is not an error; any other failure to read it is.
    pub fn version(&self) -> Result<String> {
        for key in vars::VERSION_CHAIN {
            if let Some(version) = self.env.non_empty(key) {
                tracing::debug!(source = key, %version, "resolved version");
                return Ok(version);
            }
        }

        if self.is_azure_function() {
            match std::fs::read(&self.deployment_marker) {
                Ok(contents) => {
                    let version = String::from_utf8_lossy(&contents).into_owned();
                    tracing::debug!(
                        marker = %self.deployment_marker.display(),
                        %version,
                        "resolved version from deployment marker"
                    );
                    return Ok(version);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(
                        marker = %self.deployment_marker.display(),
                        "no deployment marker"
                    );
                }
                Err(source) => {
                    return Err(RunenvError::Io {
                        path: self.deployment_marker.clone(),
                        source,
                    });
                }
            }
        }

        Ok(String::new())
    }

    /// True when [`version`](Self::version) is empty.
    pub fn is_local(&self) -> Result<bool> {
        Ok(self.version()?.is_empty())
    }

    /// True when [`version`](Self::version) is non-empty.
    pub fn is_production(&self) -> Result<bool> {
        Ok(!self.is_local()?)
    }

    /// True when `BUILD_ID` is set.
    pub fn is_jenkins(&self) -> bool {
        self.env.is_set(vars::BUILD_ID)
    }

    /// True under Jenkins or when `CI` is set.
    pub fn is_ci(&self) -> bool {
        self.is_jenkins() || self.env.is_set(vars::CI)
    }

    /// True for Cloud Run services (`K_CONFIGURATION`) and jobs (`CLOUD_RUN_JOB`).
    pub fn is_cloud_run(&self) -> bool {
        self.env.is_set(vars::K_CONFIGURATION) || self.env.is_set(vars::CLOUD_RUN_JOB)
    }

    /// True when `APPSETTING_WEBSITE_SITE_NAME` is set.
    pub fn is_azure_function(&self) -> bool {
        self.env.is_set(vars::APPSETTING_WEBSITE_SITE_NAME)
    }

    /// True when `KUBERNETES_SERVICE_HOST` is set.
    pub fn is_kubernetes(&self) -> bool {
        self.env.is_set(vars::KUBERNETES_SERVICE_HOST)
    }

    /// True when `FLY_APP_NAME` is set.
    pub fn is_fly(&self) -> bool {
        self.env.is_set(vars::FLY_APP_NAME)
    }

    /// The hosting platform, checked in the order of [`Platform`]'s variants.
    pub fn platform(&self) -> Platform {
        if self.is_cloud_run() {
            Platform::CloudRun
        } else if self.is_azure_function() {
            Platform::AzureFunction
        } else if self.is_kubernetes() {
            Platform::Kubernetes
        } else if self.is_fly() {
            Platform::Fly
        } else {
            Platform::Unknown
        }
    }

    /// Resolve the service name.
    ///
    /// Platform variables are checked first. The host name is the last
    /// resort, and failing to get it is an error.
    pub fn service_name(&self) -> Result<String> {
        for key in vars::SERVICE_NAME_CHAIN {
            if let Some(name) = self.env.non_empty(key) {
                tracing::debug!(source = key, %name, "resolved service name");
                return Ok(name);
            }
        }

        let name = (self.hostname)().map_err(RunenvError::Hostname)?;
        tracing::debug!(%name, "service name falls back to hostname");
        Ok(name)
    }

    /// Run every check once and collect the answers.
    pub fn report(&self) -> Result<EnvironmentReport> {
        let version = self.version()?;
        let local = version.is_empty();
        Ok(EnvironmentReport {
            service_name: self.service_name()?,
            platform: self.platform(),
            local,
            production: !local,
            jenkins: self.is_jenkins(),
            ci: self.is_ci(),
            cloud_run: self.is_cloud_run(),
            azure_function: self.is_azure_function(),
            kubernetes: self.is_kubernetes(),
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn make_env(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    fn classifier(vars: &[(&str, &str)]) -> Classifier<impl ReadEnv> {
        // Never read a real marker next to the test's working directory
        Classifier::new(make_env(vars))
            .with_deployment_marker("/nonexistent/deployments/active")
    }

    fn azure_with_marker(contents: Option<&str>) -> (TempDir, Classifier<impl ReadEnv>) {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("deployments").join("active");
        if let Some(contents) = contents {
            fs::create_dir_all(marker.parent().unwrap()).unwrap();
            fs::write(&marker, contents).unwrap();
        }
        let classifier = Classifier::new(make_env(&[("APPSETTING_WEBSITE_SITE_NAME", "func1")]))
            .with_deployment_marker(marker);
        (temp, classifier)
    }

    #[test]
    fn clean_env_is_local() {
        let c = classifier(&[]);
        assert_eq!(c.version().unwrap(), "");
        assert!(c.is_local().unwrap());
        assert!(!c.is_production().unwrap());
    }

    #[test]
    fn version_override_wins() {
        let c = classifier(&[
            ("VERSION", "v1.2.3"),
            ("K_REVISION", "rev"),
            ("CLOUD_RUN_EXECUTION", "exec"),
            ("APPSETTING_WEBSITE_SITE_NAME", "func1"),
        ]);
        assert_eq!(c.version().unwrap(), "v1.2.3");
        assert!(c.is_production().unwrap());
    }

    #[test]
    fn revision_before_execution() {
        let c = classifier(&[("K_REVISION", "rev-7"), ("CLOUD_RUN_EXECUTION", "exec-1")]);
        assert_eq!(c.version().unwrap(), "rev-7");
    }

    #[test]
    fn execution_used_for_jobs() {
        let c = classifier(&[("CLOUD_RUN_EXECUTION", "nightly-abc12")]);
        assert_eq!(c.version().unwrap(), "nightly-abc12");
    }

    #[test]
    fn empty_version_falls_through() {
        let c = classifier(&[("VERSION", ""), ("K_REVISION", "rev-7")]);
        assert_eq!(c.version().unwrap(), "rev-7");
    }

    #[test]
    fn local_and_production_are_complements() {
        let envs: [&[(&str, &str)]; 4] = [
            &[],
            &[("VERSION", "v1")],
            &[("CI", "true")],
            &[("CLOUD_RUN_EXECUTION", "e")],
        ];
        for vars in envs {
            let c = classifier(vars);
            assert_ne!(c.is_local().unwrap(), c.is_production().unwrap());
        }
    }

    #[test]
    fn azure_reads_deployment_marker() {
        let (_temp, c) = azure_with_marker(Some("rev-42"));
        assert_eq!(c.version().unwrap(), "rev-42");
        assert!(c.is_production().unwrap());
    }

    #[test]
    fn azure_marker_contents_are_verbatim() {
        let (_temp, c) = azure_with_marker(Some("rev-42\n"));
        assert_eq!(c.version().unwrap(), "rev-42\n");
    }

    #[test]
    fn azure_without_marker_is_local() {
        let (_temp, c) = azure_with_marker(None);
        assert_eq!(c.version().unwrap(), "");
        assert!(c.is_local().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_marker_is_an_error() {
        let temp = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let c = Classifier::new(make_env(&[("APPSETTING_WEBSITE_SITE_NAME", "func1")]))
            .with_deployment_marker(temp.path());
        let err = c.version().unwrap_err();
        assert!(matches!(err, RunenvError::Io { .. }));
        assert!(c.is_local().is_err());
    }

    #[test]
    fn marker_ignored_outside_azure() {
        let temp = TempDir::new().unwrap();
        let marker = temp.path().join("active");
        fs::write(&marker, "rev-42").unwrap();
        let c = Classifier::new(make_env(&[])).with_deployment_marker(&marker);
        assert_eq!(c.version().unwrap(), "");
    }

    #[test]
    fn default_marker_path() {
        let c = Classifier::new(make_env(&[]));
        assert_eq!(c.deployment_marker(), Path::new("../deployments/active"));
    }

    #[test]
    fn jenkins_implies_ci() {
        let c = classifier(&[("BUILD_ID", "17")]);
        assert!(c.is_jenkins());
        assert!(c.is_ci());
    }

    #[test]
    fn ci_without_jenkins() {
        let c = classifier(&[("CI", "true")]);
        assert!(c.is_ci());
        assert!(!c.is_jenkins());
    }

    #[test]
    fn empty_ci_is_not_ci() {
        let c = classifier(&[("CI", ""), ("BUILD_ID", "")]);
        assert!(!c.is_ci());
    }

    #[test]
    fn cloud_run_service_and_job() {
        assert!(classifier(&[("K_CONFIGURATION", "checkout")]).is_cloud_run());
        assert!(classifier(&[("CLOUD_RUN_JOB", "nightly")]).is_cloud_run());
        assert!(!classifier(&[("K_SERVICE", "checkout")]).is_cloud_run());
    }

    #[test]
    fn azure_and_kubernetes() {
        assert!(classifier(&[("APPSETTING_WEBSITE_SITE_NAME", "func1")]).is_azure_function());
        assert!(classifier(&[("KUBERNETES_SERVICE_HOST", "10.0.0.1")]).is_kubernetes());
        assert!(!classifier(&[]).is_azure_function());
        assert!(!classifier(&[]).is_kubernetes());
    }

    #[test]
    fn platform_order() {
        assert_eq!(
            classifier(&[("K_CONFIGURATION", "c"), ("KUBERNETES_SERVICE_HOST", "h")]).platform(),
            Platform::CloudRun
        );
        assert_eq!(
            classifier(&[("APPSETTING_WEBSITE_SITE_NAME", "f"), ("FLY_APP_NAME", "a")]).platform(),
            Platform::AzureFunction
        );
        assert_eq!(
            classifier(&[("KUBERNETES_SERVICE_HOST", "h"), ("FLY_APP_NAME", "a")]).platform(),
            Platform::Kubernetes
        );
        assert_eq!(classifier(&[("FLY_APP_NAME", "a")]).platform(), Platform::Fly);
        assert_eq!(classifier(&[]).platform(), Platform::Unknown);
    }

    #[test]
    fn service_name_from_k_service() {
        let c = classifier(&[("K_SERVICE", "checkout")]);
        assert_eq!(c.service_name().unwrap(), "checkout");
    }

    #[test]
    fn service_name_precedence() {
        let c = classifier(&[
            ("FLY_APP_NAME", "fly-app"),
            ("APPSETTING_WEBSITE_SITE_NAME", "func1"),
            ("CLOUD_RUN_JOB", "nightly"),
        ]);
        assert_eq!(c.service_name().unwrap(), "nightly");

        let c = classifier(&[
            ("FLY_APP_NAME", "fly-app"),
            ("APPSETTING_WEBSITE_SITE_NAME", "func1"),
        ]);
        assert_eq!(c.service_name().unwrap(), "func1");

        let c = classifier(&[("FLY_APP_NAME", "fly-app")]);
        assert_eq!(c.service_name().unwrap(), "fly-app");
    }

    #[test]
    fn service_name_falls_back_to_hostname() {
        let c = classifier(&[("K_SERVICE", "")]);
        let name = c.service_name().unwrap();
        assert_eq!(name, crate::sys::hostname().unwrap());
    }

    #[test]
    fn service_name_uses_injected_hostname() {
        let c = classifier(&[]).with_hostname(|| Ok("build-host".to_string()));
        assert_eq!(c.service_name().unwrap(), "build-host");

        let c = classifier(&[("K_SERVICE", "checkout")])
            .with_hostname(|| Err(io::Error::other("never called")));
        assert_eq!(c.service_name().unwrap(), "checkout");
    }

    #[test]
    fn hostname_failure_is_an_error() {
        let c = classifier(&[])
            .with_hostname(|| Err(io::Error::other("uname failed")));
        let err = c.service_name().unwrap_err();
        assert!(matches!(err, RunenvError::Hostname(_)));
        assert!(err.to_string().contains("uname failed"));
        assert!(c.report().is_err());
    }

    #[test]
    fn report_is_consistent() {
        let c = classifier(&[
            ("VERSION", "v1.2.3"),
            ("K_SERVICE", "checkout"),
            ("K_CONFIGURATION", "checkout"),
            ("CI", "true"),
        ]);
        let report = c.report().unwrap();
        assert_eq!(report.version, "v1.2.3");
        assert_eq!(report.service_name, "checkout");
        assert_eq!(report.platform, Platform::CloudRun);
        assert!(report.production);
        assert!(!report.local);
        assert!(report.ci);
        assert!(!report.jenkins);
        assert!(report.cloud_run);
    }
}
