use super::ReleaseRecord;

/// Ordered sequence of release records gathered in one run
///
/// Entries are passed through as reported; no uniqueness is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseInventory {
    records: Vec<ReleaseRecord>,
}

impl ReleaseInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one namespace's records, keeping their order
    pub fn extend_from_namespace(&mut self, records: Vec<ReleaseRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ReleaseRecord] {
        &self.records
    }

    /// Number of records whose installed version lags the latest one
    pub fn outdated_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_outdated()).count()
    }
}

impl From<Vec<ReleaseRecord>> for ReleaseInventory {
    fn from(records: Vec<ReleaseRecord>) -> Self {
        Self { records }
    }
}
