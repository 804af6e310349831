use crate::build_order::domain::DependencyTree;

/// Indentation per depth level
const INDENT: &str = "   ";

/// TreeFormatter adapter rendering dependency trees as indented text
///
/// Entries appear in traversal order, each indented by its depth.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_tree(&self, tree: &DependencyTree) -> String {
        tree.entries()
            .iter()
            .map(|entry| format!("{}{}\n", INDENT.repeat(entry.depth()), entry.line()))
            .collect()
    }

    /// Renders several trees separated by blank lines
    pub fn format_trees<'a>(&self, trees: impl IntoIterator<Item = &'a DependencyTree>) -> String {
        trees
            .into_iter()
            .map(|tree| self.format_tree(tree))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}
