use super::{RelationKind, VersionConstraint};
use serde::Serialize;

/// One line of a package's dependency tree
///
/// `depth` is the distance from the top-level package (0 for the package
/// itself). `line` is the rendered form that flattening deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    depth: usize,
    name: String,
    line: String,
}

impl TreeEntry {
    /// The depth-0 entry for a top-level package
    pub fn root(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            depth: 0,
            line: name.clone(),
            name,
        }
    }

    /// An entry for a dependency reached at `depth`
    ///
    /// Rendered as `<Label>: <name>`, followed by the constraint
    /// descriptions in brackets when the declaration carried any,
    /// e.g. `Depends: libc6 (>=)`.
    pub fn dependency(
        depth: usize,
        kind: RelationKind,
        name: impl Into<String>,
        constraints: &[VersionConstraint],
    ) -> Self {
        let name = name.into();
        let line = if constraints.is_empty() {
            format!("{}: {}", kind.label(), name)
        } else {
            let described: Vec<&str> = constraints.iter().map(|c| c.describe()).collect();
            format!("{}: {} ({})", kind.label(), name, described.join(", "))
        };
        Self {
            depth,
            name,
            line,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}

/// DependencyTree aggregate: the depth-first traversal of one top-level
/// package, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyTree {
    root: String,
    entries: Vec<TreeEntry>,
    truncated: Vec<String>,
}

impl DependencyTree {
    pub fn new(root: impl Into<String>, entries: Vec<TreeEntry>, truncated: Vec<String>) -> Self {
        Self {
            root: root.into(),
            entries,
            truncated,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Packages whose expansion stopped at the depth limit
    pub fn truncated(&self) -> &[String] {
        &self.truncated
    }

    pub fn max_depth(&self) -> usize {
        self.entries.iter().map(TreeEntry::depth).max().unwrap_or(0)
    }
}
