use crate::ports::outbound::PackageListReader;
use crate::shared::error::BuildOrderError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading the package list from disk
///
/// Reads go through the shared safety checks: symbolic links, non-regular
/// files and oversized files are refused.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageListReader for FileSystemReader {
    fn read_package_list(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(BuildOrderError::PackageListNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = read_checked(path, "package list").map_err(|e| {
            BuildOrderError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }
}
