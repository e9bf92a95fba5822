use clap::Parser;
use std::path::PathBuf;

/// Report which Helm releases in a cluster run outdated charts
///
/// Every setting can also come from the environment or from a
/// `helm-drift.config.yml` file; flags and environment variables win.
#[derive(Parser, Debug, Default)]
#[command(name = "helm-drift")]
#[command(version)]
#[command(
    about = "Snapshot outdated Helm releases in a cluster and post them to the drift API",
    long_about = None
)]
pub struct Args {
    /// Kubeconfig context of the cluster to inspect
    #[arg(long, env = "KUBE_CONTEXT")]
    pub context: Option<String>,

    /// Where the kubeconfig is placed and read from [default: /tmp/config]
    #[arg(long = "kubeconfig", env = "KUBECONFIG_PATH", value_name = "PATH")]
    pub kubeconfig_path: Option<PathBuf>,

    /// Kubeconfig to copy into the kubeconfig path before running
    #[arg(long, env = "KUBECONFIG_SOURCE", value_name = "PATH")]
    pub kubeconfig_source: Option<PathBuf>,

    /// Cluster name attached to the report (defaults to the context)
    #[arg(long, env = "CLUSTER_NAME")]
    pub cluster_name: Option<String>,

    /// helm executable [default: helm]
    #[arg(long, env = "HELM_BINARY", value_name = "PATH")]
    pub helm_binary: Option<PathBuf>,

    /// Namespaces resolved at once, 1 to 32 [default: 1]
    #[arg(short = 'j', long, env = "HELM_DRIFT_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// Base URL of the drift API, e.g. https://hoodaw.example.com
    #[arg(long, env = "HOODAW_HOST", value_name = "URL")]
    pub api_host: Option<String>,

    /// Drift API endpoint receiving the report [default: /helm_whatup]
    #[arg(long, env = "HOODAW_ENDPOINT", value_name = "PATH")]
    pub api_endpoint: Option<String>,

    /// API key sent in the X-API-KEY header
    #[arg(long, env = "HOODAW_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to a config file (defaults to ./helm-drift.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Build the report without posting it; the payload is printed instead
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the payload to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
