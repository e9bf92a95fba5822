use crate::drift_inventory::domain::KubeContext;
use crate::shared::Result;
use std::path::Path;

/// ContextSwitcher port for selecting the cluster to inspect
///
/// Returns an explicit handle instead of mutating a process-wide
/// "current context".
pub trait ContextSwitcher {
    /// Activates `context_name` from the acquired kubeconfig
    ///
    /// # Arguments
    /// * `context_name` - Context to select
    /// * `kubeconfig` - Kubeconfig bytes returned by the credential provider
    /// * `credentials_path` - Where those bytes live on disk, handed on to helm
    ///
    /// # Errors
    /// Returns an error if the kubeconfig cannot be parsed or does not
    /// define the requested context
    fn activate(
        &self,
        context_name: &str,
        kubeconfig: &[u8],
        credentials_path: &Path,
    ) -> Result<KubeContext>;
}
