use crate::drift_inventory::domain::KubeContext;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One entry of the cluster-wide release listing
///
/// Only the namespace is consumed; the inspector may report more fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseListing {
    pub namespace: String,
}

impl ReleaseListing {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

/// One entry of the per-namespace outdated release listing, as reported
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutdatedRelease {
    pub name: String,
    pub namespace: String,
    pub installed_version: String,
    pub latest_version: String,
    pub chart: String,
}

impl OutdatedRelease {
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        installed_version: impl Into<String>,
        latest_version: impl Into<String>,
        chart: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            installed_version: installed_version.into(),
            latest_version: latest_version.into(),
            chart: chart.into(),
        }
    }
}

/// ReleaseInspector port for querying Helm release state
///
/// This port abstracts the package-manager tooling (e.g., the helm CLI
/// with the whatup plugin). Both operations run against the cluster
/// context passed in; implementations must not rely on ambient state.
///
/// # Async Support
/// Implementations must be `Send + Sync` so namespaces can be resolved
/// concurrently.
#[async_trait]
pub trait ReleaseInspector: Send + Sync {
    /// Lists every release in every namespace of the cluster
    ///
    /// # Errors
    /// Returns an error if the inspector cannot be invoked or its output
    /// cannot be parsed
    async fn list_all_releases(&self, context: &KubeContext) -> Result<Vec<ReleaseListing>>;

    /// Lists installed vs. latest chart versions for one namespace
    ///
    /// The inspector's order is preserved. An empty list is a valid answer.
    ///
    /// # Errors
    /// Returns an error if the inspector cannot be invoked or its output
    /// cannot be parsed
    async fn list_outdated_releases(
        &self,
        context: &KubeContext,
        namespace: &str,
    ) -> Result<Vec<OutdatedRelease>>;
}
