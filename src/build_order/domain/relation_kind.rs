use serde::Serialize;

/// Category of a dependency declaration as reported by the dependency tool
///
/// The declaration order of the variants is the traversal order used by the
/// tree builder, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RelationKind {
    PreDepend,
    Normal,
    BuildDepend,
    BuildDependIndep,
}

impl RelationKind {
    /// All relation kinds in traversal order
    pub const ALL: [RelationKind; 4] = [
        RelationKind::PreDepend,
        RelationKind::Normal,
        RelationKind::BuildDepend,
        RelationKind::BuildDependIndep,
    ];

    /// Section label as printed by the dependency tool (without the colon)
    pub fn label(self) -> &'static str {
        match self {
            RelationKind::PreDepend => "PreDepends",
            RelationKind::Normal => "Depends",
            RelationKind::BuildDepend => "Build-Depends",
            RelationKind::BuildDependIndep => "Build-Depends-Indep",
        }
    }

    /// Looks up a relation kind by its exact section label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
