use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum kubeconfig size accepted from disk (10 MB)
pub const MAX_KUBECONFIG_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file, not a symlink
///
/// Uses `symlink_metadata()` so the link itself is inspected rather
/// than its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Human readable name used in error messages (e.g., "kubeconfig")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata at {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} {} is a symbolic link. Symbolic links are not allowed.",
            file_description,
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!(
            "{} {} is not a regular file",
            file_description,
            path.display()
        );
    }

    Ok(())
}

/// Validates that a file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular file after the symlink and size checks
pub fn read_validated_file(path: &Path, file_description: &str, max_size: u64) -> Result<Vec<u8>> {
    validate_regular_file(path, file_description)?;

    let size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to stat {}: {}", path.display(), e))?
        .len();
    validate_file_size(size, path, max_size)?;

    fs::read(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} {}: {}",
            file_description,
            path.display(),
            e
        )
    })
}
