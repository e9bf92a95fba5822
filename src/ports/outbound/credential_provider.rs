use crate::shared::Result;
use std::path::Path;

/// CredentialProvider port for obtaining cluster credentials
///
/// The provider places a usable kubeconfig at `destination` for helm and
/// returns its bytes, which the context switcher parses.
pub trait CredentialProvider {
    /// Materializes the kubeconfig and returns its raw bytes
    ///
    /// # Errors
    /// Returns an error if the credentials cannot be obtained or written
    fn acquire_kubeconfig(&self, destination: &Path) -> Result<Vec<u8>>;
}
