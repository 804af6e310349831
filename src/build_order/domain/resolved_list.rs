use serde::Serialize;

/// Flattened build sequence for one top-level package, deepest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedList {
    package: String,
    lines: Vec<String>,
}

impl ResolvedList {
    pub fn new(package: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            package: package.into(),
            lines,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// File name the list is written to: `<package>.resolved`
    pub fn file_name(&self) -> String {
        format!("{}.resolved", self.package)
    }
}
