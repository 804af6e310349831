use super::{DeepMerge, RelationKind, VersionConstraint};
use serde::Serialize;
use std::collections::BTreeMap;

/// Dependencies of one package for one relation kind, keyed by dependency name
pub type DependencyMap = BTreeMap<String, Vec<VersionConstraint>>;

/// Parsed dependency facts for a single package
///
/// Every relation kind is present in `relations`, possibly with an empty map,
/// from construction onwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyRecord {
    full_name: String,
    relations: BTreeMap<RelationKind, DependencyMap>,
}

impl DependencyRecord {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            relations: RelationKind::ALL
                .into_iter()
                .map(|kind| (kind, DependencyMap::new()))
                .collect(),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Appends a constraint for `dependency` under `kind`.
    ///
    /// A dependency declared several times keeps all of its constraints in
    /// the order they were seen. `None` records the dependency without a
    /// constraint.
    pub fn add_dependency(
        &mut self,
        kind: RelationKind,
        dependency: impl Into<String>,
        constraint: Option<VersionConstraint>,
    ) {
        let constraints = self
            .relations
            .entry(kind)
            .or_default()
            .entry(dependency.into())
            .or_default();
        constraints.extend(constraint);
    }

    /// Folds another block for the same package into this one.
    ///
    /// Unlike `merge_from`, constraints on a dependency both blocks declare
    /// are concatenated, so nothing either block stated is dropped.
    pub fn append(&mut self, other: DependencyRecord) {
        if !other.full_name.is_empty() {
            self.full_name = other.full_name;
        }
        for (kind, dependencies) in other.relations {
            let target = self.relations.entry(kind).or_default();
            for (dependency, constraints) in dependencies {
                target.entry(dependency).or_default().extend(constraints);
            }
        }
    }

    /// Dependencies declared under `kind`
    pub fn dependencies(&self, kind: RelationKind) -> Option<&DependencyMap> {
        self.relations.get(&kind)
    }

    /// Total number of declared (kind, dependency) pairs
    pub fn dependency_count(&self) -> usize {
        self.relations.values().map(|deps| deps.len()).sum()
    }
}

impl Default for DependencyRecord {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl DeepMerge for DependencyRecord {
    fn merge_from(&mut self, source: Self) {
        if !source.full_name.is_empty() {
            self.full_name = source.full_name;
        }
        self.relations.merge_from(source.relations);
    }
}
