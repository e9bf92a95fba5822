use crate::drift_inventory::domain::{KubeContext, Namespace, ReleaseRecord};
use crate::ports::outbound::{OutdatedRelease, ReleaseInspector};
use crate::shared::error::{DriftError, InspectorStage};
use crate::shared::Result;

/// ResolveReleasesUseCase - Installed vs. latest versions for one namespace
///
/// # Type Parameters
/// * `I` - ReleaseInspector implementation
pub struct ResolveReleasesUseCase<'a, I: ReleaseInspector> {
    inspector: &'a I,
}

impl<'a, I: ReleaseInspector> ResolveReleasesUseCase<'a, I> {
    pub fn new(inspector: &'a I) -> Self {
        Self { inspector }
    }

    /// Resolves every release of `namespace`, in the inspector's order
    ///
    /// An empty namespace resolves to an empty list.
    ///
    /// # Errors
    /// Returns `DriftError::InspectorUnavailable` naming the namespace if
    /// the inspector fails or reports a malformed record
    pub async fn resolve(
        &self,
        context: &KubeContext,
        namespace: &Namespace,
    ) -> Result<Vec<ReleaseRecord>> {
        let stage = || InspectorStage::Resolution {
            namespace: namespace.to_string(),
        };

        let outdated = self
            .inspector
            .list_outdated_releases(context, namespace.as_str())
            .await
            .map_err(|e| DriftError::inspector(stage(), &e))?;

        let records = outdated
            .into_iter()
            .map(to_record)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                DriftError::inspector(
                    stage(),
                    &e.context("Inspector returned a malformed release record"),
                )
            })?;

        Ok(records)
    }
}

fn to_record(release: OutdatedRelease) -> Result<ReleaseRecord> {
    ReleaseRecord::new(
        release.name,
        release.namespace,
        release.installed_version,
        release.latest_version,
        release.chart,
    )
}
