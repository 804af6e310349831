use std::path::PathBuf;

/// BuildOrderRequest - Internal request DTO for the build order use case
#[derive(Debug, Clone)]
pub struct BuildOrderRequest {
    /// File listing the packages to resolve, one per line
    pub package_list_path: PathBuf,
    /// Extra ignore patterns (`*` wildcards allowed)
    pub ignore_patterns: Vec<String>,
    /// Whether `debconf` and `perl-base` are ignored as well
    pub include_default_ignores: bool,
}

impl BuildOrderRequest {
    pub fn new(
        package_list_path: PathBuf,
        ignore_patterns: Vec<String>,
        include_default_ignores: bool,
    ) -> Self {
        Self {
            package_list_path,
            ignore_patterns,
            include_default_ignores,
        }
    }
}
