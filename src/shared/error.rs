use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI systems to tell a failed
/// snapshot apart from a misconfigured invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated (and transmitted unless dry-run)
    Success = 0,
    /// A pipeline stage failed: credentials, context, inspector or sink
    PipelineFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Configuration could not be loaded or is incomplete
    ConfigurationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PipelineFailed => write!(f, "Pipeline Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (3)"),
        }
    }
}

/// Which Release Inspector call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorStage {
    /// Cluster-wide release listing used for namespace discovery
    Discovery,
    /// Per-namespace outdated release listing
    Resolution { namespace: String },
}

impl fmt::Display for InspectorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectorStage::Discovery => write!(f, "namespace discovery"),
            InspectorStage::Resolution { namespace } => {
                write!(f, "release resolution for namespace '{}'", namespace)
            }
        }
    }
}

/// Pipeline errors. Every variant terminates the run.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("Failed to acquire cluster credentials: {path}\nDetails: {details}\n\n💡 Hint: Check that the kubeconfig source exists and is readable")]
    CredentialAcquisitionFailed { path: PathBuf, details: String },

    #[error("Failed to activate cluster context '{context}'\nDetails: {details}\n\n💡 Hint: Verify the context name exists in the kubeconfig")]
    ContextSwitchFailed { context: String, details: String },

    #[error("Release inspector unavailable during {stage}\nDetails: {details}\n\n💡 Hint: Check that helm and the helm-whatup plugin are installed and the cluster is reachable")]
    InspectorUnavailable {
        stage: InspectorStage,
        details: String,
    },

    #[error("Failed to transmit report to {endpoint}\nDetails: {details}\n\n💡 Hint: Verify the API host, endpoint and API key")]
    ReportTransmissionFailed { endpoint: String, details: String },
}

impl DriftError {
    /// Builds an inspector error from any error chain, keeping every cause
    pub fn inspector(stage: InspectorStage, error: &anyhow::Error) -> Self {
        DriftError::InspectorUnavailable {
            stage,
            details: format!("{:#}", error),
        }
    }
}

/// Configuration errors raised while resolving CLI, env and file settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required setting: {setting}\n\n💡 Hint: {hint}")]
    MissingSetting { setting: String, hint: String },

    #[error("Invalid value for {setting}: {reason}")]
    InvalidSetting { setting: String, reason: String },
}
