/// Mock implementations for testing
mod mock_cluster_access;
mod mock_progress_reporter;
mod mock_release_inspector;
mod mock_report_sink;

pub use mock_cluster_access::{MockContextSwitcher, MockCredentialProvider};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_release_inspector::MockReleaseInspector;
pub use mock_report_sink::MockReportSink;
