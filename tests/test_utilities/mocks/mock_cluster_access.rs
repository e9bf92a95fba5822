use helm_drift::prelude::*;
use std::path::Path;

/// Mock CredentialProvider returning fixed kubeconfig bytes
#[derive(Default)]
pub struct MockCredentialProvider {
    fail: bool,
}

impl MockCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl CredentialProvider for MockCredentialProvider {
    fn acquire_kubeconfig(&self, destination: &Path) -> Result<Vec<u8>> {
        if self.fail {
            anyhow::bail!("kubeconfig source {} not found", destination.display());
        }
        Ok(b"apiVersion: v1\nkind: Config\n".to_vec())
    }
}

/// Mock ContextSwitcher knowing a fixed list of contexts
pub struct MockContextSwitcher {
    known: Vec<String>,
}

impl MockContextSwitcher {
    pub fn with_contexts(contexts: &[&str]) -> Self {
        Self {
            known: contexts.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ContextSwitcher for MockContextSwitcher {
    fn activate(
        &self,
        context_name: &str,
        kubeconfig: &[u8],
        credentials_path: &Path,
    ) -> Result<KubeContext> {
        if kubeconfig.is_empty() {
            anyhow::bail!("kubeconfig is empty");
        }
        if !self.known.iter().any(|c| c == context_name) {
            anyhow::bail!("Context '{}' not found", context_name);
        }
        Ok(KubeContext::new(
            context_name.to_string(),
            credentials_path.to_path_buf(),
        ))
    }
}
