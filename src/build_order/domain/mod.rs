pub mod dependency_record;
pub mod dependency_tree;
pub mod inventory;
pub mod merge;
pub mod relation_kind;
pub mod resolved_list;
pub mod version_constraint;

pub use dependency_record::{DependencyMap, DependencyRecord};
pub use dependency_tree::{DependencyTree, TreeEntry};
pub use inventory::{Inventory, ParsedDependencies};
pub use merge::{merge, DeepMerge};
pub use relation_kind::RelationKind;
pub use resolved_list::ResolvedList;
pub use version_constraint::VersionConstraint;
