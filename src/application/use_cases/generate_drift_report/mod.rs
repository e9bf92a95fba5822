use super::{AggregateInventoryUseCase, DiscoverNamespacesUseCase};
use crate::application::dto::{DriftReportRequest, DriftReportResponse, ReportPayload};
use crate::drift_inventory::domain::{ClusterReport, KubeContext, NamespaceSet};
use crate::drift_inventory::services::ReportBuilder;
use crate::ports::outbound::{
    ContextSwitcher, CredentialProvider, ProgressReporter, ReleaseInspector, ReportSink,
};
use crate::shared::error::DriftError;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// GenerateDriftReportUseCase - Core use case for the release drift snapshot
///
/// Orchestrates the whole pipeline: acquire credentials, activate the
/// cluster context, discover namespaces, aggregate releases, build the
/// report and hand it to the report sink. Any stage failure ends the run.
///
/// # Type Parameters
/// * `CP` - CredentialProvider implementation
/// * `CS` - ContextSwitcher implementation
/// * `RI` - ReleaseInspector implementation
/// * `RS` - ReportSink implementation (absent for dry runs)
/// * `PR` - ProgressReporter implementation
pub struct GenerateDriftReportUseCase<CP, CS, RI, RS, PR> {
    credential_provider: CP,
    context_switcher: CS,
    release_inspector: RI,
    report_sink: Option<RS>,
    progress_reporter: PR,
}

impl<CP, CS, RI, RS, PR> GenerateDriftReportUseCase<CP, CS, RI, RS, PR>
where
    CP: CredentialProvider,
    CS: ContextSwitcher,
    RI: ReleaseInspector,
    RS: ReportSink,
    PR: ProgressReporter,
{
    /// Creates a new GenerateDriftReportUseCase with injected dependencies
    pub fn new(
        credential_provider: CP,
        context_switcher: CS,
        release_inspector: RI,
        report_sink: Option<RS>,
        progress_reporter: PR,
    ) -> Self {
        Self {
            credential_provider,
            context_switcher,
            release_inspector,
            report_sink,
            progress_reporter,
        }
    }

    /// Executes the pipeline, stamping the report with the current time
    pub async fn execute(&self, request: DriftReportRequest) -> Result<DriftReportResponse> {
        self.execute_at(request, Utc::now()).await
    }

    /// Executes the pipeline with an explicit snapshot time
    pub async fn execute_at(
        &self,
        request: DriftReportRequest,
        now: DateTime<Utc>,
    ) -> Result<DriftReportResponse> {
        // Step 1: Credentials and context
        let context = self.activate_context(&request)?;

        // Step 2: Namespaces hosting at least one release
        let namespaces = self.discover_namespaces(&context).await?;

        // Step 3: Resolve every namespace (fail fast)
        let report = self
            .build_report(&request, &context, &namespaces, now)
            .await?;

        // Step 4: Payload and transmission
        let payload = ReportPayload::from(&report);
        let transmitted = self.transmit_if_configured(&payload).await?;

        Ok(DriftReportResponse::new(
            report,
            payload,
            namespaces.len(),
            transmitted,
        ))
    }

    /// Acquires the kubeconfig and activates the requested context
    fn activate_context(&self, request: &DriftReportRequest) -> Result<KubeContext> {
        self.progress_reporter.report(&format!(
            "🔑 Acquiring cluster credentials into: {}",
            request.kubeconfig_path.display()
        ));

        let kubeconfig = self
            .credential_provider
            .acquire_kubeconfig(&request.kubeconfig_path)
            .map_err(|e| DriftError::CredentialAcquisitionFailed {
                path: request.kubeconfig_path.clone(),
                details: format!("{:#}", e),
            })?;

        let context = self
            .context_switcher
            .activate(&request.context, &kubeconfig, &request.kubeconfig_path)
            .map_err(|e| DriftError::ContextSwitchFailed {
                context: request.context.clone(),
                details: format!("{:#}", e),
            })?;

        self.progress_reporter
            .report(&format!("☸️  Using cluster context: {}", context.name()));

        Ok(context)
    }

    async fn discover_namespaces(&self, context: &KubeContext) -> Result<NamespaceSet> {
        self.progress_reporter
            .report("🔍 Discovering namespaces with Helm releases...");

        let namespaces = DiscoverNamespacesUseCase::new(&self.release_inspector)
            .discover(context)
            .await?;

        self.progress_reporter.report(&format!(
            "✅ Found {} namespace(s) with releases",
            namespaces.len()
        ));

        Ok(namespaces)
    }

    /// Aggregates the inventory and wraps it into a ClusterReport
    async fn build_report(
        &self,
        request: &DriftReportRequest,
        context: &KubeContext,
        namespaces: &NamespaceSet,
        now: DateTime<Utc>,
    ) -> Result<ClusterReport> {
        if !namespaces.is_empty() {
            self.progress_reporter
                .report("📦 Resolving installed and latest chart versions...");
        }

        let aggregator =
            AggregateInventoryUseCase::new(&self.release_inspector, request.concurrency);
        let inventory = match aggregator
            .aggregate_with_progress(context, namespaces, |done, total, namespace| {
                self.progress_reporter
                    .report_progress(done, total, Some(namespace))
            })
            .await
        {
            Ok(inventory) => inventory,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Release resolution aborted; no report will be produced");
                return Err(e);
            }
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Release inventory complete: {} release(s), {} outdated",
            inventory.len(),
            inventory.outdated_count()
        ));

        Ok(ReportBuilder::build(inventory, &request.cluster_name, now))
    }

    /// Sends the payload to the report sink, if one is configured
    async fn transmit_if_configured(&self, payload: &ReportPayload) -> Result<bool> {
        let Some(sink) = &self.report_sink else {
            return Ok(false);
        };

        let destination = sink.destination();
        self.progress_reporter
            .report(&format!("📤 Sending report to: {}", destination));

        sink.transmit(payload)
            .await
            .map_err(|e| DriftError::ReportTransmissionFailed {
                endpoint: destination.clone(),
                details: format!("{:#}", e),
            })?;

        self.progress_reporter.report("✅ Report accepted");
        Ok(true)
    }
}
