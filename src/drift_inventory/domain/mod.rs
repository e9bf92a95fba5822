pub mod cluster_report;
pub mod kube_context;
pub mod namespace_set;
pub mod release_inventory;
pub mod release_record;

pub use cluster_report::{ClusterReport, REPORT_TIMESTAMP_FORMAT};
pub use kube_context::KubeContext;
pub use namespace_set::NamespaceSet;
pub use release_inventory::ReleaseInventory;
pub use release_record::{Namespace, ReleaseRecord};
