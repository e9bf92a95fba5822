use super::output_parser::{parse_outdated_releases, parse_release_list};
use crate::drift_inventory::domain::KubeContext;
use crate::ports::outbound::{OutdatedRelease, ReleaseInspector, ReleaseListing};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Maximum stderr excerpt carried into error messages
const MAX_STDERR_CHARS: usize = 2000;

/// HelmCliInspector adapter for querying releases through the helm CLI
///
/// This adapter implements the ReleaseInspector port by spawning
/// `helm list` and `helm whatup` (helm-whatup plugin). The cluster context
/// is passed to every invocation as global `--kube-context`/`--kubeconfig`
/// flags ahead of the subcommand, which helm also exports to plugins as
/// `HELM_KUBECONTEXT`/`KUBECONFIG`. The same variables are set on the
/// child directly, never on this process.
///
/// Child processes are killed when their future is dropped, so an
/// aborted aggregation does not leave helm running.
pub struct HelmCliInspector {
    helm_binary: PathBuf,
}

impl HelmCliInspector {
    pub fn new(helm_binary: impl Into<PathBuf>) -> Self {
        Self {
            helm_binary: helm_binary.into(),
        }
    }

    fn command(&self, context: &KubeContext) -> Command {
        let mut command = Command::new(&self.helm_binary);
        command
            .arg("--kube-context")
            .arg(context.name())
            .arg("--kubeconfig")
            .arg(context.kubeconfig_path())
            .env("HELM_KUBECONTEXT", context.name())
            .env("KUBECONFIG", context.kubeconfig_path())
            .stdin(Stdio::null())
            .kill_on_drop(true);
        command
    }

    /// Runs helm and returns stdout, failing on a non-zero exit status
    async fn run(&self, mut command: Command, description: &str) -> Result<Vec<u8>> {
        let output = command.output().await.with_context(|| {
            format!(
                "Failed to run {} ({})",
                self.helm_binary.display(),
                description
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let excerpt: String = stderr.trim().chars().take(MAX_STDERR_CHARS).collect();
            anyhow::bail!("{} exited with {}: {}", description, output.status, excerpt);
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ReleaseInspector for HelmCliInspector {
    async fn list_all_releases(&self, context: &KubeContext) -> Result<Vec<ReleaseListing>> {
        let mut command = self.command(context);
        // helm list returns 256 releases unless told otherwise; 0 lifts the cap
        command.args(["list", "--all-namespaces", "--max", "0", "--output", "json"]);

        let stdout = self.run(command, "helm list").await?;
        parse_release_list(&stdout)
    }

    async fn list_outdated_releases(
        &self,
        context: &KubeContext,
        namespace: &str,
    ) -> Result<Vec<OutdatedRelease>> {
        let mut command = self.command(context);
        command.args(["whatup", "--namespace", namespace, "--output", "json"]);

        let stdout = self
            .run(command, &format!("helm whatup --namespace {}", namespace))
            .await?;
        parse_outdated_releases(&stdout)
    }
}
