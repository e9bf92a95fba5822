use async_trait::async_trait;
use helm_drift::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock ReleaseInspector serving canned helm results
#[derive(Default, Clone)]
pub struct MockReleaseInspector {
    listing: Vec<String>,
    outdated: HashMap<String, Vec<OutdatedRelease>>,
    failing_namespaces: HashSet<String>,
    fail_listing: bool,
    /// Context name seen by every call, in call order
    pub contexts_seen: Arc<Mutex<Vec<String>>>,
    /// Namespaces passed to `list_outdated_releases`, in call order
    pub resolved: Arc<Mutex<Vec<String>>>,
}

impl MockReleaseInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one `helm list` row per namespace given
    pub fn with_listing(mut self, namespaces: &[&str]) -> Self {
        self.listing
            .extend(namespaces.iter().map(|ns| ns.to_string()));
        self
    }

    pub fn with_outdated(
        mut self,
        namespace: &str,
        name: &str,
        installed_version: &str,
        latest_version: &str,
    ) -> Self {
        self.outdated
            .entry(namespace.to_string())
            .or_default()
            .push(OutdatedRelease::new(
                name,
                namespace,
                installed_version,
                latest_version,
                name,
            ));
        self
    }

    pub fn failing_namespace(mut self, namespace: &str) -> Self {
        self.failing_namespaces.insert(namespace.to_string());
        self
    }

    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub fn resolved_namespaces(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseInspector for MockReleaseInspector {
    async fn list_all_releases(&self, context: &KubeContext) -> Result<Vec<ReleaseListing>> {
        self.contexts_seen
            .lock()
            .unwrap()
            .push(context.name().to_string());
        if self.fail_listing {
            anyhow::bail!("helm list exited with exit status: 1: Kubernetes cluster unreachable");
        }
        Ok(self
            .listing
            .iter()
            .map(|ns| ReleaseListing::new(ns.as_str()))
            .collect())
    }

    async fn list_outdated_releases(
        &self,
        context: &KubeContext,
        namespace: &str,
    ) -> Result<Vec<OutdatedRelease>> {
        self.contexts_seen
            .lock()
            .unwrap()
            .push(context.name().to_string());
        self.resolved.lock().unwrap().push(namespace.to_string());
        if self.failing_namespaces.contains(namespace) {
            anyhow::bail!("helm whatup --namespace {} exited with exit status: 1", namespace);
        }
        Ok(self.outdated.get(namespace).cloned().unwrap_or_default())
    }
}
