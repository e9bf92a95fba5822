use crate::drift_inventory::domain::{KubeContext, Namespace, NamespaceSet};
use crate::ports::outbound::ReleaseInspector;
use crate::shared::error::{DriftError, InspectorStage};
use crate::shared::Result;

/// DiscoverNamespacesUseCase - Finds every namespace hosting a release
///
/// # Type Parameters
/// * `I` - ReleaseInspector implementation
pub struct DiscoverNamespacesUseCase<'a, I: ReleaseInspector> {
    inspector: &'a I,
}

impl<'a, I: ReleaseInspector> DiscoverNamespacesUseCase<'a, I> {
    pub fn new(inspector: &'a I) -> Self {
        Self { inspector }
    }

    /// Lists all releases cluster-wide and projects out distinct namespaces
    ///
    /// # Errors
    /// Returns `DriftError::InspectorUnavailable` (discovery stage) if the
    /// inspector fails or reports an invalid namespace
    pub async fn discover(&self, context: &KubeContext) -> Result<NamespaceSet> {
        let listings = self
            .inspector
            .list_all_releases(context)
            .await
            .map_err(|e| DriftError::inspector(InspectorStage::Discovery, &e))?;

        let namespaces = listings
            .into_iter()
            .map(|listing| Namespace::new(listing.namespace))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                DriftError::inspector(
                    InspectorStage::Discovery,
                    &e.context("Release listing contains an invalid namespace"),
                )
            })?;

        Ok(namespaces.into_iter().collect())
    }
}
