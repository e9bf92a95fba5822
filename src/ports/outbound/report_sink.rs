use crate::application::dto::ReportPayload;
use crate::shared::Result;
use async_trait::async_trait;

/// ReportSink port for delivering the final drift report
///
/// This port abstracts the downstream ingestion API. Only success or
/// failure is observed; response bodies are not consumed.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Transmits the payload once, without retrying
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or the sink
    /// answers with a non-success status
    async fn transmit(&self, payload: &ReportPayload) -> Result<()>;

    /// Human readable destination, used in progress and error messages
    fn destination(&self) -> String;
}
