use helm_drift::adapters::outbound::console::StderrProgressReporter;
use helm_drift::adapters::outbound::filesystem::{
    KubeconfigContextSwitcher, LocalKubeconfigProvider,
};
use helm_drift::adapters::outbound::helm::HelmCliInspector;
use helm_drift::adapters::outbound::network::HoodawClient;
use helm_drift::application::dto::DriftReportRequest;
use helm_drift::application::factories::{PresenterFactory, PresenterType};
use helm_drift::application::use_cases::GenerateDriftReportUseCase;
use helm_drift::cli::Args;
use helm_drift::config::{self, RunConfig};
use helm_drift::shared::error::ExitCode;
use helm_drift::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let config = match load_run_config(args) {
        Ok(config) => config,
        Err(e) => exit_with(&e, ExitCode::ConfigurationError),
    };

    if let Err(e) = run(config).await {
        exit_with(&e, ExitCode::PipelineFailed);
    }
}

fn exit_with(error: &anyhow::Error, code: ExitCode) -> ! {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
    process::exit(code.as_i32());
}

fn load_run_config(args: Args) -> Result<RunConfig> {
    let file = config::load_for_args(&args, Path::new("."))?;
    Ok(config::resolve(args, file)?)
}

async fn run(config: RunConfig) -> Result<()> {
    // Create adapters (Dependency Injection)
    let report_sink = match &config.sink {
        Some(sink) => Some(HoodawClient::new(
            &sink.api_host,
            &sink.api_endpoint,
            sink.api_key.clone(),
        )?),
        None => None,
    };
    let use_case = GenerateDriftReportUseCase::new(
        LocalKubeconfigProvider::new(config.kubeconfig_source.clone()),
        KubeconfigContextSwitcher::new(),
        HelmCliInspector::new(config.helm_binary.clone()),
        report_sink,
        StderrProgressReporter::new(),
    );

    let request = DriftReportRequest::new(
        config.context.clone(),
        config.kubeconfig_path.clone(),
        config.cluster_name.clone(),
        config.concurrency,
    );

    let response = use_case.execute(request).await?;

    if config.dry_run {
        eprintln!(
            "🧪 Dry run: report for {} was not sent",
            response.report.cluster_name()
        );
    }

    // Dry runs always show the payload; --output writes it in either mode
    if config.dry_run || config.output.is_some() {
        let presenter = PresenterFactory::create(PresenterType::from_output(config.output));
        presenter.present(&response.payload.to_json_pretty()?)?;
    }

    Ok(())
}
