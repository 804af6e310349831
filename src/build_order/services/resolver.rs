use crate::build_order::domain::{DependencyTree, ResolvedList, TreeEntry};
use std::collections::{BTreeMap, HashSet};

/// Resolver service flattening dependency trees into build sequences
pub struct Resolver;

impl Resolver {
    /// Flattens one tree: deepest entries first, entries of equal depth in
    /// emission order, each rendered line kept once.
    ///
    /// Deduplication is on the rendered line, so the same package reached
    /// through two relation kinds yields two lines.
    pub fn flatten(tree: &DependencyTree) -> ResolvedList {
        let mut sorted: Vec<&TreeEntry> = tree.entries().iter().collect();
        sorted.sort_by(|a, b| b.depth().cmp(&a.depth()));

        let mut seen = HashSet::new();
        let lines = sorted
            .into_iter()
            .filter(|&entry| seen.insert(entry.line()))
            .map(|entry| entry.line().to_string())
            .collect();

        ResolvedList::new(tree.root(), lines)
    }

    /// Flattens every tree, in package-name order
    pub fn resolve(trees: &BTreeMap<String, DependencyTree>) -> Vec<ResolvedList> {
        trees.values().map(Self::flatten).collect()
    }

    /// Concatenation of all resolved lists, in the order given
    pub fn concatenate(resolved: &[ResolvedList]) -> Vec<String> {
        resolved
            .iter()
            .flat_map(|list| list.lines().iter().cloned())
            .collect()
    }
}
