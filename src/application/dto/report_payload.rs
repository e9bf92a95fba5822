use crate::drift_inventory::domain::{ClusterReport, ReleaseRecord};
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Wire form of one release, field names fixed by the drift API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePayload {
    pub name: String,
    pub namespace: String,
    pub installed_version: String,
    pub latest_version: String,
    pub chart: String,
}

impl From<&ReleaseRecord> for ReleasePayload {
    fn from(record: &ReleaseRecord) -> Self {
        Self {
            name: record.name().to_string(),
            namespace: record.namespace().to_string(),
            installed_version: record.installed_version().to_string(),
            latest_version: record.latest_version().to_string(),
            chart: record.chart().to_string(),
        }
    }
}

/// ReportPayload - Request body accepted by the drift API
///
/// Exactly two keys: `updated_at` and `clusters`. The cluster name is
/// not part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub updated_at: String,
    pub clusters: Vec<ReleasePayload>,
}

impl ReportPayload {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&ClusterReport> for ReportPayload {
    fn from(report: &ClusterReport) -> Self {
        Self {
            updated_at: report.generated_at_text(),
            clusters: report
                .releases()
                .records()
                .iter()
                .map(ReleasePayload::from)
                .collect(),
        }
    }
}
