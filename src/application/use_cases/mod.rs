/// Use cases module containing application business logic orchestration
mod aggregate_inventory;
mod discover_namespaces;
mod generate_drift_report;
mod resolve_releases;

pub use aggregate_inventory::{AggregateInventoryUseCase, MAX_CONCURRENCY};
pub use discover_namespaces::DiscoverNamespacesUseCase;
pub use generate_drift_report::GenerateDriftReportUseCase;
pub use resolve_releases::ResolveReleasesUseCase;
