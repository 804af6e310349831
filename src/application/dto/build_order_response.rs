use crate::build_order::domain::{DependencyTree, Inventory, ResolvedList};
use crate::build_order::services::Resolver;
use std::collections::BTreeMap;

/// BuildOrderResponse - Internal response DTO from the build order use case
///
/// Carries every intermediate result so adapters can write the resolved
/// files, print trees or report statistics.
#[derive(Debug, Clone)]
pub struct BuildOrderResponse {
    /// Merged inventory of every successful tool invocation
    pub inventory: Inventory,
    /// Canonical names of the top-level packages, sorted and de-duplicated
    pub top_level: Vec<String>,
    /// Dependency tree per top-level package
    pub trees: BTreeMap<String, DependencyTree>,
    /// Resolved list per top-level package, in top-level order
    pub resolved: Vec<ResolvedList>,
    /// Input names whose tool invocation failed
    pub skipped: Vec<String>,
}

impl BuildOrderResponse {
    pub fn new(
        inventory: Inventory,
        top_level: Vec<String>,
        trees: BTreeMap<String, DependencyTree>,
        resolved: Vec<ResolvedList>,
        skipped: Vec<String>,
    ) -> Self {
        Self {
            inventory,
            top_level,
            trees,
            resolved,
            skipped,
        }
    }

    /// Concatenation of all resolved lists
    pub fn build_order(&self) -> Vec<String> {
        Resolver::concatenate(&self.resolved)
    }
}
