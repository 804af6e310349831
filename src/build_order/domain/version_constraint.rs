use serde::Serialize;

/// A version restriction attached to one dependency declaration,
/// e.g. `>= 2.28` from `libc6 (>= 2.28)`.
///
/// Either part may be empty: a bare version token carries no relation symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionConstraint {
    relation: String,
    version: String,
}

impl VersionConstraint {
    pub fn new(relation: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            version: version.into(),
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Short form used inside rendered tree lines: the relation symbol,
    /// or the raw version when no symbol was given.
    pub fn describe(&self) -> &str {
        if self.relation.is_empty() {
            &self.version
        } else {
            &self.relation
        }
    }
}

impl std::fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.relation.is_empty(), self.version.is_empty()) {
            (false, false) => write!(f, "{} {}", self.relation, self.version),
            (true, _) => write!(f, "{}", self.version),
            (false, true) => write!(f, "{}", self.relation),
        }
    }
}
