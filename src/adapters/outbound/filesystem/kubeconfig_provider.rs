use crate::ports::outbound::CredentialProvider;
use crate::shared::security::{read_validated_file, MAX_KUBECONFIG_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// LocalKubeconfigProvider adapter for kubeconfigs provisioned on disk
///
/// With a source path, the kubeconfig is copied to the destination helm
/// is pointed at. Without one, the destination must already hold
/// a kubeconfig (e.g., mounted from a secret).
pub struct LocalKubeconfigProvider {
    source: Option<PathBuf>,
}

impl LocalKubeconfigProvider {
    pub fn new(source: Option<PathBuf>) -> Self {
        Self { source }
    }

    fn install(bytes: &[u8], destination: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(destination) {
            if metadata.is_symlink() {
                anyhow::bail!(
                    "Security: kubeconfig destination {} is a symbolic link. Writing to symbolic links is not allowed.",
                    destination.display()
                );
            }
        }

        if let Some(parent) = destination.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                anyhow::bail!(
                    "Parent directory does not exist: {}",
                    parent.display()
                );
            }
        }

        fs::write(destination, bytes).map_err(|e| {
            anyhow::anyhow!(
                "Failed to write kubeconfig to {}: {}",
                destination.display(),
                e
            )
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(destination, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }
}

impl CredentialProvider for LocalKubeconfigProvider {
    fn acquire_kubeconfig(&self, destination: &Path) -> Result<Vec<u8>> {
        let bytes = match &self.source {
            Some(source) => {
                let bytes = read_validated_file(source, "kubeconfig source", MAX_KUBECONFIG_SIZE)?;
                if source != destination {
                    Self::install(&bytes, destination)?;
                }
                bytes
            }
            None => read_validated_file(destination, "kubeconfig", MAX_KUBECONFIG_SIZE)?,
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            anyhow::bail!("kubeconfig is empty");
        }

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KUBECONFIG: &str = "apiVersion: v1\nkind: Config\n";

    #[test]
    fn test_acquire_copies_source_to_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        let destination = temp_dir.path().join("config");
        fs::write(&source, KUBECONFIG).unwrap();

        let provider = LocalKubeconfigProvider::new(Some(source));
        let bytes = provider.acquire_kubeconfig(&destination).unwrap();

        assert_eq!(bytes, KUBECONFIG.as_bytes());
        assert_eq!(fs::read_to_string(&destination).unwrap(), KUBECONFIG);
    }

    #[cfg(unix)]
    #[test]
    fn test_acquire_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        let destination = temp_dir.path().join("config");
        fs::write(&source, KUBECONFIG).unwrap();

        LocalKubeconfigProvider::new(Some(source))
            .acquire_kubeconfig(&destination)
            .unwrap();

        let mode = fs::metadata(&destination).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_acquire_uses_existing_destination() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("config");
        fs::write(&destination, KUBECONFIG).unwrap();

        let bytes = LocalKubeconfigProvider::new(None)
            .acquire_kubeconfig(&destination)
            .unwrap();
        assert_eq!(bytes, KUBECONFIG.as_bytes());
    }

    #[test]
    fn test_acquire_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let provider = LocalKubeconfigProvider::new(Some(temp_dir.path().join("missing")));

        let result = provider.acquire_kubeconfig(&temp_dir.path().join("config"));
        assert!(result.is_err());
    }

    #[test]
    fn test_acquire_missing_destination_without_source() {
        let temp_dir = TempDir::new().unwrap();
        let result =
            LocalKubeconfigProvider::new(None).acquire_kubeconfig(&temp_dir.path().join("config"));
        assert!(result.is_err());
    }

    #[test]
    fn test_acquire_empty_kubeconfig() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("config");
        fs::write(&destination, "\n").unwrap();

        let err = LocalKubeconfigProvider::new(None)
            .acquire_kubeconfig(&destination)
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_acquire_destination_parent_missing() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source");
        fs::write(&source, KUBECONFIG).unwrap();

        let err = LocalKubeconfigProvider::new(Some(source))
            .acquire_kubeconfig(&temp_dir.path().join("missing/config"))
            .unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }
}
