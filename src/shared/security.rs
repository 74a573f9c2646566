use crate::shared::error::BomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum dataset size accepted by the readers (100 MB).
///
/// Bounding input size is the only resource limit the analysis has; the
/// aggregation itself is never interrupted once started.
pub const MAX_DATASET_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a dataset path can be read safely
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected rather than its
/// target. Rejects symbolic links, non-regular files and oversized files.
///
/// # Arguments
/// * `path` - The dataset path to validate
/// * `dataset` - Human-readable dataset label (e.g., "BOM (A-L)") for messages
///
/// # Errors
/// Returns an error if:
/// - The path does not exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds [`MAX_DATASET_SIZE`]
pub fn validate_dataset_file(path: &Path, dataset: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| BomError::DatasetReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", dataset, e),
    })?;

    if metadata.is_symlink() {
        return Err(BomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} dataset is a symbolic link", dataset),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(BomError::DatasetReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", path.display()),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_DATASET_SIZE)?;
    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(BomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the dataset into smaller partitions".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Rejects output targets that already exist as symbolic links
pub fn validate_not_symlink(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(BomError::SecurityError {
                path: path.to_path_buf(),
                reason: "Output path is a symbolic link".to_string(),
                hint: "Choose an output path that is not a link".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_dataset_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.csv");
        fs::write(&file_path, "FG Code,L2 Code\nP1,C1\n").unwrap();

        let size = validate_dataset_file(&file_path, "BOM (A-L)").unwrap();
        assert_eq!(size, 22);
    }

    #[test]
    fn test_validate_dataset_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/bom.csv");
        let result = validate_dataset_file(&path, "BOM (A-L)");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read BOM (A-L) metadata"));
    }

    #[test]
    fn test_validate_dataset_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_dataset_file(temp_dir.path(), "Dispensing");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_dataset_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.csv");
        fs::write(&target, "SOH\n1\n").unwrap();
        let link = temp_dir.path().join("link.csv");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_dataset_file(&link, "Raw Materials");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/bom.csv");
        let result = validate_file_size(MAX_DATASET_SIZE + 1, &path, MAX_DATASET_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_not_symlink_missing_path_is_ok() {
        let path = PathBuf::from("/nonexistent/report.json");
        assert!(validate_not_symlink(&path).is_ok());
    }

    #[test]
    fn test_max_dataset_size_constant() {
        assert_eq!(MAX_DATASET_SIZE, 100 * 1024 * 1024);
    }
}
