use super::IgnoreList;
use crate::build_order::domain::{DependencyTree, Inventory, RelationKind, TreeEntry};
use std::collections::{BTreeMap, HashMap};

/// Maximum depth a tree is expanded to; deeper branches are cut and reported
pub const MAX_TREE_DEPTH: usize = 256;

/// First-seen depth per (relation kind, dependency name) within one tree
type ListedPackages = HashMap<(RelationKind, String), usize>;

/// TreeBuilder service walking the inventory depth-first from each
/// top-level package.
///
/// This is a pure algorithm: the inventory is only read, and all traversal
/// state lives in a per-package [`Walk`] that is discarded afterwards.
pub struct TreeBuilder<'a> {
    inventory: &'a Inventory,
    ignore_list: &'a IgnoreList,
}

/// Working state for a single top-level package
#[derive(Default)]
struct Walk {
    listed: ListedPackages,
    truncated: Vec<String>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(inventory: &'a Inventory, ignore_list: &'a IgnoreList) -> Self {
        Self {
            inventory,
            ignore_list,
        }
    }

    /// Builds one tree per top-level package, keyed and ordered by name
    pub fn build_trees<S: AsRef<str>>(&self, top_level: &[S]) -> BTreeMap<String, DependencyTree> {
        let mut trees = BTreeMap::new();
        for package in top_level {
            let package = package.as_ref();
            if !trees.contains_key(package) {
                trees.insert(package.to_string(), self.build_tree(package));
            }
        }
        trees
    }

    /// Builds the tree of a single top-level package
    ///
    /// The first entry is the package itself at depth 0, followed by the
    /// depth-first traversal of its dependencies.
    pub fn build_tree(&self, package: &str) -> DependencyTree {
        let mut walk = Walk::default();
        let mut entries = vec![TreeEntry::root(package)];
        entries.extend(self.visit(package, 0, &mut walk));
        DependencyTree::new(package, entries, walk.truncated)
    }

    /// Emits the dependencies of `package`, found at `depth`, and recurses
    /// into each dependency the first time it is seen.
    ///
    /// A repeat at the same or a shallower depth than the one recorded is
    /// emitted again but not expanded; a deeper repeat is dropped. Packages
    /// absent from the inventory have no dependencies.
    fn visit(&self, package: &str, depth: usize, walk: &mut Walk) -> Vec<TreeEntry> {
        let Some(record) = self.inventory.get(package) else {
            return Vec::new();
        };
        let child_depth = depth + 1;
        let mut entries = Vec::new();

        for kind in RelationKind::ALL {
            let Some(dependencies) = record.dependencies(kind) else {
                continue;
            };

            for (name, constraints) in dependencies {
                let key = (kind, name.clone());
                match walk.listed.get(&key).copied() {
                    None => {
                        walk.listed.insert(key, child_depth);
                        entries.push(TreeEntry::dependency(child_depth, kind, name, constraints));

                        if self.ignore_list.matches(name) {
                            continue;
                        }
                        if child_depth >= MAX_TREE_DEPTH {
                            walk.truncated.push(name.clone());
                            continue;
                        }
                        entries.extend(self.visit(name, child_depth, walk));
                    }
                    Some(recorded) if recorded >= child_depth => {
                        entries.push(TreeEntry::dependency(child_depth, kind, name, constraints));
                    }
                    Some(_) => {}
                }
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_order::domain::{DependencyRecord, ParsedDependencies, VersionConstraint};

    /// Inventory from (package, [(kind, dependency)]) tuples
    fn inventory(packages: &[(&str, &[(RelationKind, &str)])]) -> Inventory {
        let mut parsed = ParsedDependencies::new();
        for (name, deps) in packages {
            let mut record = DependencyRecord::new(*name);
            for (kind, dep) in deps.iter() {
                record.add_dependency(*kind, *dep, None);
            }
            parsed.insert(name.to_string(), record);
        }
        let mut inventory = Inventory::new();
        inventory.merge(parsed);
        inventory
    }

    fn rendered(tree: &DependencyTree) -> Vec<(usize, String)> {
        tree.entries()
            .iter()
            .map(|e| (e.depth(), e.line().to_string()))
            .collect()
    }

    use RelationKind::*;

    #[test]
    fn test_single_dependency_with_constraint() {
        let mut record = DependencyRecord::new("a");
        record.add_dependency(Normal, "b", Some(VersionConstraint::new(">=", "1.0")));
        let mut inventory = Inventory::new();
        inventory.merge(ParsedDependencies::from([("a".to_string(), record)]));
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");

        assert_eq!(
            rendered(&tree),
            vec![(0, "a".to_string()), (1, "Depends: b (>=)".to_string())]
        );
    }

    #[test]
    fn test_shallower_repeat_is_emitted_without_recursion() {
        // x -> y, z ; y -> z ; z -> w
        let inventory = inventory(&[
            ("x", &[(Normal, "y"), (Normal, "z")]),
            ("y", &[(Normal, "z")]),
            ("z", &[(Normal, "w")]),
        ]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("x");

        assert_eq!(
            rendered(&tree),
            vec![
                (0, "x".to_string()),
                (1, "Depends: y".to_string()),
                (2, "Depends: z".to_string()),
                (3, "Depends: w".to_string()),
                (1, "Depends: z".to_string()),
            ]
        );
    }

    #[test]
    fn test_equal_depth_repeat_is_emitted() {
        // a -> b, c ; b -> d ; c -> d : d is seen twice at depth 2
        let inventory = inventory(&[
            ("a", &[(Normal, "b"), (Normal, "c")]),
            ("b", &[(Normal, "d")]),
            ("c", &[(Normal, "d")]),
            ("d", &[(Normal, "e")]),
        ]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");

        let d_entries: Vec<usize> = tree
            .entries()
            .iter()
            .filter(|e| e.name() == "d")
            .map(|e| e.depth())
            .collect();
        assert_eq!(d_entries, vec![2, 2]);
        // e is expanded only once
        assert_eq!(tree.entries().iter().filter(|e| e.name() == "e").count(), 1);
    }

    #[test]
    fn test_deeper_repeat_is_dropped() {
        // a -> b, c ; c -> b : b at depth 2 after depth 1
        let inventory = inventory(&[
            ("a", &[(Normal, "b"), (Normal, "c")]),
            ("c", &[(Normal, "b")]),
        ]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");

        assert_eq!(
            rendered(&tree),
            vec![
                (0, "a".to_string()),
                (1, "Depends: b".to_string()),
                (1, "Depends: c".to_string()),
            ]
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let inventory = inventory(&[("a", &[(Normal, "b")]), ("b", &[(Normal, "a")])]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");

        assert_eq!(
            rendered(&tree),
            vec![
                (0, "a".to_string()),
                (1, "Depends: b".to_string()),
                (2, "Depends: a".to_string()),
            ]
        );
    }

    #[test]
    fn test_relation_kind_order_then_name_order() {
        let inventory = inventory(&[(
            "a",
            &[
                (BuildDependIndep, "sphinx"),
                (Normal, "zlib1g"),
                (Normal, "libc6"),
                (BuildDepend, "debhelper"),
                (PreDepend, "dpkg"),
            ],
        )]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");

        let lines: Vec<&str> = tree.entries().iter().map(|e| e.line()).collect();
        assert_eq!(
            lines,
            vec![
                "a",
                "PreDepends: dpkg",
                "Depends: libc6",
                "Depends: zlib1g",
                "Build-Depends: debhelper",
                "Build-Depends-Indep: sphinx",
            ]
        );
    }

    #[test]
    fn test_same_name_under_different_kinds_tracked_separately() {
        // b is a build dependency at depth 1 and a runtime dependency of c at depth 2
        let inventory = inventory(&[
            ("a", &[(Normal, "c"), (BuildDepend, "b")]),
            ("c", &[(Normal, "b")]),
            ("b", &[(Normal, "x")]),
        ]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");

        assert_eq!(
            rendered(&tree),
            vec![
                (0, "a".to_string()),
                (1, "Depends: c".to_string()),
                (2, "Depends: b".to_string()),
                (3, "Depends: x".to_string()),
                (1, "Build-Depends: b".to_string()),
                (2, "Depends: x".to_string()),
            ]
        );
    }

    #[test]
    fn test_ignored_package_is_listed_but_not_expanded() {
        let inventory = inventory(&[
            ("a", &[(PreDepend, "debconf"), (Normal, "b")]),
            ("debconf", &[(Normal, "perl-base")]),
            ("b", &[]),
        ]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");

        let names: Vec<&str> = tree.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "debconf", "b"]);
    }

    #[test]
    fn test_missing_inventory_entry_is_a_leaf() {
        let inventory = inventory(&[("a", &[(Normal, "virtual-pkg")])]);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("a");
        assert_eq!(tree.entries().len(), 2);

        let unknown = TreeBuilder::new(&inventory, &ignore).build_tree("unknown");
        assert_eq!(rendered(&unknown), vec![(0, "unknown".to_string())]);
    }

    #[test]
    fn test_state_does_not_leak_between_packages() {
        let inventory = inventory(&[
            ("a", &[(Normal, "c")]),
            ("b", &[(Normal, "c")]),
            ("c", &[(Normal, "d")]),
        ]);
        let ignore = IgnoreList::with_defaults();
        let builder = TreeBuilder::new(&inventory, &ignore);

        let trees = builder.build_trees(&["b", "a"]);

        assert_eq!(trees.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(trees["a"].entries().len(), 3);
        assert_eq!(trees["b"].entries().len(), 3);
    }

    #[test]
    fn test_build_is_deterministic() {
        let inventory = inventory(&[
            ("a", &[(Normal, "c"), (Normal, "b"), (BuildDepend, "d")]),
            ("b", &[(Normal, "d"), (Normal, "c")]),
            ("c", &[(PreDepend, "d")]),
        ]);
        let ignore = IgnoreList::with_defaults();
        let builder = TreeBuilder::new(&inventory, &ignore);

        let first = builder.build_trees(&["a", "b"]);
        let second = builder.build_trees(&["b", "a"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_limit_truncates() {
        let names: Vec<String> = (0..=MAX_TREE_DEPTH + 1).map(|i| format!("p{}", i)).collect();
        let mut parsed = ParsedDependencies::new();
        for pair in names.windows(2) {
            let mut record = DependencyRecord::new(pair[0].as_str());
            record.add_dependency(Normal, pair[1].as_str(), None);
            parsed.insert(pair[0].clone(), record);
        }
        let mut inventory = Inventory::new();
        inventory.merge(parsed);
        let ignore = IgnoreList::with_defaults();

        let tree = TreeBuilder::new(&inventory, &ignore).build_tree("p0");

        assert_eq!(tree.max_depth(), MAX_TREE_DEPTH);
        assert_eq!(tree.truncated(), &[format!("p{}", MAX_TREE_DEPTH)]);
    }
}
