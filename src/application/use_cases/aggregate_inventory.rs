use super::ResolveReleasesUseCase;
use crate::drift_inventory::domain::{
    KubeContext, NamespaceSet, ReleaseInventory, ReleaseRecord,
};
use crate::ports::outbound::ReleaseInspector;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::pin::pin;

/// Upper bound for concurrent namespace resolution
pub const MAX_CONCURRENCY: usize = 32;

/// AggregateInventoryUseCase - Resolves every namespace into one inventory
///
/// Failure policy is fail-fast: the first namespace that cannot be
/// resolved aborts the whole run and no partial inventory is returned.
/// Lookups still in flight at that point are dropped.
///
/// # Type Parameters
/// * `I` - ReleaseInspector implementation
pub struct AggregateInventoryUseCase<'a, I: ReleaseInspector> {
    resolver: ResolveReleasesUseCase<'a, I>,
    concurrency: usize,
}

impl<'a, I: ReleaseInspector> AggregateInventoryUseCase<'a, I> {
    /// Creates the aggregator
    ///
    /// # Arguments
    /// * `inspector` - Release inspector shared by all namespace lookups
    /// * `concurrency` - Lookups allowed in flight, clamped to `1..=MAX_CONCURRENCY`
    pub fn new(inspector: &'a I, concurrency: usize) -> Self {
        Self {
            resolver: ResolveReleasesUseCase::new(inspector),
            concurrency: concurrency.clamp(1, MAX_CONCURRENCY),
        }
    }

    pub async fn aggregate(
        &self,
        context: &KubeContext,
        namespaces: &NamespaceSet,
    ) -> Result<ReleaseInventory> {
        self.aggregate_with_progress(context, namespaces, |_, _, _| {})
            .await
    }

    /// Aggregates all namespaces, calling `on_resolved(done, total, namespace)`
    /// after each one completes
    ///
    /// Lookups complete in any order and the first failure returns at once,
    /// dropping the rest. Records are reassembled in namespace-set order, so
    /// each namespace's records stay contiguous and in the inspector's order.
    pub async fn aggregate_with_progress<F>(
        &self,
        context: &KubeContext,
        namespaces: &NamespaceSet,
        on_resolved: F,
    ) -> Result<ReleaseInventory>
    where
        F: Fn(usize, usize, &str),
    {
        let total = namespaces.len();
        let mut slots: Vec<Option<Vec<ReleaseRecord>>> = vec![None; total];

        let mut results = pin!(stream::iter(namespaces.iter().enumerate())
            .map(|(index, namespace)| async move {
                self.resolver
                    .resolve(context, namespace)
                    .await
                    .map(|records| (index, namespace, records))
            })
            .buffer_unordered(self.concurrency));

        let mut done = 0;
        while let Some(result) = results.next().await {
            let (index, namespace, records) = result?;
            done += 1;
            on_resolved(done, total, namespace.as_str());
            slots[index] = Some(records);
        }

        let mut inventory = ReleaseInventory::new();
        for records in slots.into_iter().flatten() {
            inventory.extend_from_namespace(records);
        }
        Ok(inventory)
    }
}
