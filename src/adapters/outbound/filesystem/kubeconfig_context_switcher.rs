use crate::drift_inventory::domain::KubeContext;
use crate::ports::outbound::ContextSwitcher;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct KubeConfig {
    #[serde(default)]
    clusters: Vec<NamedCluster>,
    #[serde(default)]
    contexts: Vec<NamedContext>,
}

#[derive(Debug, Deserialize)]
struct NamedCluster {
    name: String,
}

#[derive(Debug, Deserialize)]
struct NamedContext {
    name: String,
    context: ContextDetails,
}

#[derive(Debug, Deserialize)]
struct ContextDetails {
    cluster: String,
}

/// KubeconfigContextSwitcher adapter for selecting a context from a kubeconfig
///
/// Parses the bytes handed over by the credential provider, validates that the context exists and points at a defined cluster,
/// then hands back an explicit `KubeContext`. The kubeconfig's
/// `current-context` is neither read nor rewritten.
pub struct KubeconfigContextSwitcher;

impl KubeconfigContextSwitcher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KubeconfigContextSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextSwitcher for KubeconfigContextSwitcher {
    fn activate(
        &self,
        context_name: &str,
        kubeconfig: &[u8],
        credentials_path: &Path,
    ) -> Result<KubeContext> {
        let config: KubeConfig = serde_yaml_ng::from_slice(kubeconfig).with_context(|| {
            format!("Failed to parse kubeconfig: {}", credentials_path.display())
        })?;

        let context = config
            .contexts
            .iter()
            .find(|c| c.name == context_name)
            .ok_or_else(|| {
                let available: Vec<&str> = config.contexts.iter().map(|c| c.name.as_str()).collect();
                anyhow::anyhow!(
                    "Context '{}' not found in {} (available: {})",
                    context_name,
                    credentials_path.display(),
                    if available.is_empty() {
                        "none".to_string()
                    } else {
                        available.join(", ")
                    }
                )
            })?;

        if !config
            .clusters
            .iter()
            .any(|cluster| cluster.name == context.context.cluster)
        {
            anyhow::bail!(
                "Context '{}' references unknown cluster '{}'",
                context_name,
                context.context.cluster
            );
        }

        Ok(KubeContext::new(
            context_name.to_string(),
            credentials_path.to_path_buf(),
        ))
    }
}
