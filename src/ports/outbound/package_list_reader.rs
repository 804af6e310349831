use crate::shared::Result;
use std::path::Path;

/// PackageListReader port for reading the list of packages to resolve
///
/// This port abstracts the file system operations needed to read the
/// newline-separated package list given on the command line.
pub trait PackageListReader {
    /// Reads the package names, one per line, in file order
    ///
    /// Blank lines are passed through as empty names.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_package_list(&self, path: &Path) -> Result<Vec<String>>;
}
