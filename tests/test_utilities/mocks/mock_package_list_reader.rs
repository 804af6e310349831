use build_order::prelude::*;
use std::path::Path;

/// Mock PackageListReader for testing
pub struct MockPackageListReader {
    pub packages: Vec<String>,
    pub should_fail: bool,
}

impl MockPackageListReader {
    pub fn new(packages: &[&str]) -> Self {
        Self {
            packages: packages.iter().map(|p| p.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            packages: Vec::new(),
            should_fail: true,
        }
    }
}

impl PackageListReader for MockPackageListReader {
    fn read_package_list(&self, _path: &Path) -> Result<Vec<String>> {
        if self.should_fail {
            anyhow::bail!("Mock package list read failure");
        }
        Ok(self.packages.clone())
    }
}
