/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod drift_report_request;
mod drift_report_response;
mod report_payload;

pub use drift_report_request::DriftReportRequest;
pub use drift_report_response::DriftReportResponse;
pub use report_payload::{ReleasePayload, ReportPayload};
