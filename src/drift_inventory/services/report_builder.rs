use crate::drift_inventory::domain::{ClusterReport, ReleaseInventory};
use chrono::{DateTime, Utc};

/// ReportBuilder service for assembling the cluster-level drift report
///
/// Pure construction: no I/O, no clock access. The caller supplies `now`.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Wraps an inventory with a timestamp and cluster identity
    ///
    /// # Arguments
    /// * `inventory` - Releases gathered across all namespaces
    /// * `cluster_name` - Identity of the reported cluster
    /// * `now` - Snapshot time
    pub fn build(
        inventory: ReleaseInventory,
        cluster_name: &str,
        now: DateTime<Utc>,
    ) -> ClusterReport {
        ClusterReport::new(now, cluster_name.to_string(), inventory)
    }
}
