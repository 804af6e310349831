use super::{DeepMerge, DependencyRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Parsed output of one tool invocation: package name to its record
pub type ParsedDependencies = BTreeMap<String, DependencyRecord>;

/// Inventory aggregate: every package the dependency tool reported on,
/// accumulated across all queried packages of a run.
///
/// Built once during collection, then only read by the tree builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inventory {
    records: ParsedDependencies,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-merges one invocation's parsed output into the inventory
    pub fn merge(&mut self, parsed: ParsedDependencies) {
        self.records.merge_from(parsed);
    }

    pub fn get(&self, package_name: &str) -> Option<&DependencyRecord> {
        self.records.get(package_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
