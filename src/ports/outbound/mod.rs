/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (helm, kubeconfig files, the drift
/// API, the console).
pub mod context_switcher;
pub mod credential_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod release_inspector;
pub mod report_sink;

pub use context_switcher::ContextSwitcher;
pub use credential_provider::CredentialProvider;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use release_inspector::{OutdatedRelease, ReleaseInspector, ReleaseListing};
pub use report_sink::ReportSink;
