use super::ReportPayload;
use crate::drift_inventory::domain::ClusterReport;

/// DriftReportResponse - Result of one pipeline run
#[derive(Debug, Clone)]
pub struct DriftReportResponse {
    /// The assembled cluster report
    pub report: ClusterReport,
    /// Wire payload derived from `report`
    pub payload: ReportPayload,
    /// Number of namespaces that were resolved
    pub namespace_count: usize,
    /// Whether the payload was delivered to the report sink
    pub transmitted: bool,
}

impl DriftReportResponse {
    pub fn new(
        report: ClusterReport,
        payload: ReportPayload,
        namespace_count: usize,
        transmitted: bool,
    ) -> Self {
        Self {
            report,
            payload,
            namespace_count,
            transmitted,
        }
    }
}
