//! Configuration file support for helm-drift.
//!
//! Settings come from three places: command-line flags, environment
//! variables (both through clap) and an optional `helm-drift.config.yml`.
//! Flags and environment win over the file; defaults fill the rest.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::use_cases::MAX_CONCURRENCY;
use crate::cli::Args;
use crate::shared::error::ConfigError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "helm-drift.config.yml";
pub const DEFAULT_CONTEXT: &str = "live.cloud-platform.service.justice.gov.uk";
pub const DEFAULT_KUBECONFIG_PATH: &str = "/tmp/config";
pub const DEFAULT_API_ENDPOINT: &str = "/helm_whatup";
pub const DEFAULT_HELM_BINARY: &str = "helm";
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub context: Option<String>,
    pub kubeconfig_path: Option<PathBuf>,
    pub kubeconfig_source: Option<PathBuf>,
    pub cluster_name: Option<String>,
    pub helm_binary: Option<PathBuf>,
    pub concurrency: Option<usize>,
    pub api_host: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_key: Option<String>,
    pub dry_run: Option<bool>,
    pub output: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Drift API coordinates, present only when the report is transmitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSettings {
    pub api_host: String,
    pub api_endpoint: String,
    pub api_key: String,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub context: String,
    pub kubeconfig_path: PathBuf,
    pub kubeconfig_source: Option<PathBuf>,
    pub cluster_name: String,
    pub helm_binary: PathBuf,
    pub concurrency: usize,
    pub sink: Option<SinkSettings>,
    pub dry_run: bool,
    pub output: Option<PathBuf>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Loads the file named by `--config`, or the one discovered in `dir`
pub fn load_for_args(args: &Args, dir: &Path) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(dir)?.unwrap_or_default()),
    }
}

/// Merges flags/env over the file, applies defaults and validates the result
pub fn resolve(args: Args, file: ConfigFile) -> std::result::Result<RunConfig, ConfigError> {
    let context = non_empty(args.context.or(file.context))
        .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());
    let cluster_name = non_empty(args.cluster_name.or(file.cluster_name))
        .unwrap_or_else(|| context.clone());

    let concurrency = args
        .concurrency
        .or(file.concurrency)
        .unwrap_or(DEFAULT_CONCURRENCY);
    if !(1..=MAX_CONCURRENCY).contains(&concurrency) {
        return Err(ConfigError::InvalidSetting {
            setting: "concurrency".to_string(),
            reason: format!("must be between 1 and {}, got {}", MAX_CONCURRENCY, concurrency),
        });
    }

    let dry_run = args.dry_run || file.dry_run.unwrap_or(false);

    let api_host = non_empty(args.api_host.or(file.api_host));
    let api_endpoint = non_empty(args.api_endpoint.or(file.api_endpoint))
        .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());
    let api_key = non_empty(args.api_key.or(file.api_key));

    if let Some(host) = &api_host {
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(ConfigError::InvalidSetting {
                setting: "api_host".to_string(),
                reason: format!("'{}' must start with http:// or https://", host),
            });
        }
    }
    if !api_endpoint.starts_with('/') {
        return Err(ConfigError::InvalidSetting {
            setting: "api_endpoint".to_string(),
            reason: format!("'{}' must start with '/'", api_endpoint),
        });
    }

    let sink = if dry_run {
        None
    } else {
        let api_host = api_host.ok_or_else(|| ConfigError::MissingSetting {
            setting: "api_host".to_string(),
            hint: "Pass --api-host, set HOODAW_HOST, or use --dry-run".to_string(),
        })?;
        let api_key = api_key.ok_or_else(|| ConfigError::MissingSetting {
            setting: "api_key".to_string(),
            hint: "Pass --api-key, set HOODAW_API_KEY, or use --dry-run".to_string(),
        })?;
        Some(SinkSettings {
            api_host,
            api_endpoint,
            api_key,
        })
    };

    Ok(RunConfig {
        context,
        kubeconfig_path: args
            .kubeconfig_path
            .or(file.kubeconfig_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KUBECONFIG_PATH)),
        kubeconfig_source: args.kubeconfig_source.or(file.kubeconfig_source),
        cluster_name,
        helm_binary: args
            .helm_binary
            .or(file.helm_binary)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HELM_BINARY)),
        concurrency,
        sink,
        dry_run,
        output: args.output.or(file.output),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
