/// Filesystem adapters for kubeconfig handling and report output
mod file_writer;
mod kubeconfig_context_switcher;
mod kubeconfig_provider;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use kubeconfig_context_switcher::KubeconfigContextSwitcher;
pub use kubeconfig_provider::LocalKubeconfigProvider;
