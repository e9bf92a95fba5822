use super::ReleaseInventory;
use chrono::{DateTime, Utc};

/// Layout of `updated_at` expected by the drift API
///
/// Zero-padded month and hour, unpadded day, minute and second.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%-d %H:%-M:%-S UTC";

/// ClusterReport value object - the unit handed to the report sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterReport {
    generated_at: DateTime<Utc>,
    cluster_name: String,
    releases: ReleaseInventory,
}

impl ClusterReport {
    pub fn new(
        generated_at: DateTime<Utc>,
        cluster_name: String,
        releases: ReleaseInventory,
    ) -> Self {
        Self {
            generated_at,
            cluster_name,
            releases,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Report time rendered in the sink's fixed textual format
    pub fn generated_at_text(&self) -> String {
        self.generated_at.format(REPORT_TIMESTAMP_FORMAT).to_string()
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn releases(&self) -> &ReleaseInventory {
        &self.releases
    }
}
