//! helm-drift - Helm release drift inventory for Kubernetes clusters
//!
//! Lists every Helm release in a cluster, compares installed chart
//! versions with the latest published ones (via the helm-whatup plugin)
//! and posts a timestamped snapshot to the "How out of date are we" API.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`drift_inventory`): Release records, namespace sets and reports
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): helm CLI, kubeconfig files, HTTP and console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use helm_drift::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! let use_case = GenerateDriftReportUseCase::new(
//!     LocalKubeconfigProvider::new(Some(PathBuf::from("/secrets/kubeconfig"))),
//!     KubeconfigContextSwitcher::new(),
//!     HelmCliInspector::new("helm"),
//!     Some(HoodawClient::new("https://hoodaw.example.com", "/helm_whatup", "key".into())?),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = DriftReportRequest::new(
//!     "live.cloud-platform.service.justice.gov.uk".to_string(),
//!     PathBuf::from("/tmp/config"),
//!     "live".to_string(),
//!     1,
//! );
//! let response = use_case.execute(request).await?;
//! println!("{}", response.payload.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod drift_inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, KubeconfigContextSwitcher, LocalKubeconfigProvider, StdoutPresenter,
    };
    pub use crate::adapters::outbound::helm::HelmCliInspector;
    pub use crate::adapters::outbound::network::HoodawClient;
    pub use crate::application::dto::{DriftReportRequest, DriftReportResponse, ReportPayload};
    pub use crate::application::use_cases::{
        AggregateInventoryUseCase, DiscoverNamespacesUseCase, GenerateDriftReportUseCase,
        ResolveReleasesUseCase,
    };
    pub use crate::drift_inventory::domain::{
        ClusterReport, KubeContext, Namespace, NamespaceSet, ReleaseInventory, ReleaseRecord,
    };
    pub use crate::drift_inventory::services::{unique_in_order, ReportBuilder};
    pub use crate::ports::outbound::{
        ContextSwitcher, CredentialProvider, OutdatedRelease, OutputPresenter, ProgressReporter,
        ReleaseInspector, ReleaseListing, ReportSink,
    };
    pub use crate::shared::error::{DriftError, InspectorStage};
    pub use crate::shared::Result;
}
