use std::path::{Path, PathBuf};

/// Handle to an activated cluster context
///
/// Passed explicitly to every release inspector call instead of relying
/// on a process-wide "current context".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubeContext {
    name: String,
    kubeconfig_path: PathBuf,
}

impl KubeContext {
    pub fn new(name: String, kubeconfig_path: PathBuf) -> Self {
        Self {
            name,
            kubeconfig_path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kubeconfig_path(&self) -> &Path {
        &self.kubeconfig_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kube_context_new() {
        let ctx = KubeContext::new("live".to_string(), PathBuf::from("/tmp/config"));
        assert_eq!(ctx.name(), "live");
        assert_eq!(ctx.kubeconfig_path(), Path::new("/tmp/config"));
    }
}
