use async_trait::async_trait;
use helm_drift::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ReportSink recording every payload it accepts
#[derive(Default, Clone)]
pub struct MockReportSink {
    reject_with: Option<u16>,
    pub received: Arc<Mutex<Vec<ReportPayload>>>,
}

impl MockReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every payload with the given HTTP status
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    pub fn payloads(&self) -> Vec<ReportPayload> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for MockReportSink {
    async fn transmit(&self, payload: &ReportPayload) -> Result<()> {
        if let Some(status) = self.reject_with {
            anyhow::bail!("Drift API returned status code {}", status);
        }
        self.received.lock().unwrap().push(payload.clone());
        Ok(())
    }

    fn destination(&self) -> String {
        "https://hoodaw.example.test/helm_whatup".to_string()
    }
}
