use std::path::PathBuf;

/// DriftReportRequest - Internal request DTO for the drift report use case
#[derive(Debug, Clone)]
pub struct DriftReportRequest {
    /// Kubeconfig context to inspect
    pub context: String,
    /// Where the credential provider places the kubeconfig
    pub kubeconfig_path: PathBuf,
    /// Identity attached to the report
    pub cluster_name: String,
    /// Maximum namespaces resolved at once (1 = sequential)
    pub concurrency: usize,
}

impl DriftReportRequest {
    pub fn new(
        context: String,
        kubeconfig_path: PathBuf,
        cluster_name: String,
        concurrency: usize,
    ) -> Self {
        Self {
            context,
            kubeconfig_path,
            cluster_name,
            concurrency,
        }
    }
}
