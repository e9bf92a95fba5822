use crate::shared::Result;

/// Maximum length for Kubernetes namespace names (DNS-1123 label)
const MAX_NAMESPACE_LENGTH: usize = 63;

/// Maximum length for Helm release names
const MAX_RELEASE_NAME_LENGTH: usize = 53;

/// NewType wrapper for a Kubernetes namespace with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Namespace cannot be empty");
        }

        if name.len() > MAX_NAMESPACE_LENGTH {
            anyhow::bail!(
                "Namespace is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_NAMESPACE_LENGTH
            );
        }

        // Namespaces end up as CLI arguments, so only DNS label characters are accepted
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Namespace '{}' contains invalid characters. Only lowercase alphanumerics and hyphens are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ReleaseRecord value object describing the drift state of one Helm release
///
/// Identity is `(namespace, name)`. Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    name: String,
    namespace: Namespace,
    installed_version: String,
    latest_version: String,
    chart: String,
}

impl ReleaseRecord {
    pub fn new(
        name: String,
        namespace: String,
        installed_version: String,
        latest_version: String,
        chart: String,
    ) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Release name cannot be empty");
        }

        if name.len() > MAX_RELEASE_NAME_LENGTH {
            anyhow::bail!(
                "Release name '{}' is too long ({} bytes). Maximum allowed: {} bytes",
                name,
                name.len(),
                MAX_RELEASE_NAME_LENGTH
            );
        }

        Ok(Self {
            name,
            namespace: Namespace::new(namespace)?,
            installed_version,
            latest_version,
            chart,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    pub fn installed_version(&self) -> &str {
        &self.installed_version
    }

    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    pub fn chart(&self) -> &str {
        &self.chart
    }

    /// Identity of the release within a cluster
    pub fn key(&self) -> (&str, &str) {
        (self.namespace(), &self.name)
    }

    /// Whether the installed chart version differs from the latest one
    pub fn is_outdated(&self) -> bool {
        self.installed_version != self.latest_version
    }
}
