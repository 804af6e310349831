use crate::build_order::domain::{RelationKind, VersionConstraint};
use regex::Regex;
use std::sync::LazyLock;

/// Matches a relation label followed by a colon, optionally indented,
/// optionally followed by a dependency declaration.
static LABELLED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<indent>\s*)(?P<label>PreDepends|Depends|Build-Depends|Build-Depends-Indep):(?:\s+(?P<rest>.*))?$",
    )
    .expect("Failed to compile relation label pattern")
});

/// A dependency declaration extracted from a line: `name (op version)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyFact {
    pub name: String,
    pub constraint: Option<VersionConstraint>,
}

/// Classification of one line of dependency tool output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only line
    Blank,
    /// Non-indented line that is not a relation label: starts a new package record
    FlushMarker(String),
    /// Non-indented `Label:` line; switches the current relation kind.
    /// Any declaration after the colon is carried along.
    SectionHeader {
        kind: RelationKind,
        inline: Option<DependencyFact>,
    },
    /// Indented declaration. `kind` is set when the line names its own label
    /// (`  Depends: libc6 (>= 2.28)`), otherwise the current section applies.
    Detail {
        kind: Option<RelationKind>,
        fact: DependencyFact,
    },
    /// Anything else; the reason is reported as a warning
    Unparseable(String),
}

/// Classifies a single raw output line
pub fn parse_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Blank;
    }

    if let Some(captures) = LABELLED_LINE.captures(line) {
        let kind = match captures
            .name("label")
            .and_then(|m| RelationKind::from_label(m.as_str()))
        {
            Some(kind) => kind,
            None => return ParsedLine::Unparseable("unknown relation label".to_string()),
        };
        let indented = captures.name("indent").is_some_and(|m| !m.as_str().is_empty());
        let inline = captures
            .name("rest")
            .and_then(|m| extract_dependency(m.as_str()));

        return match (indented, inline) {
            (false, inline) => ParsedLine::SectionHeader { kind, inline },
            (true, Some(fact)) => ParsedLine::Detail {
                kind: Some(kind),
                fact,
            },
            (true, None) => ParsedLine::Unparseable(format!(
                "indented '{}:' label without a dependency",
                kind.label()
            )),
        };
    }

    if line.starts_with(char::is_whitespace) {
        return match extract_dependency(line) {
            Some(fact) => ParsedLine::Detail { kind: None, fact },
            None => ParsedLine::Unparseable("empty dependency declaration".to_string()),
        };
    }

    match line.split_whitespace().next() {
        Some(name) => ParsedLine::FlushMarker(name.to_string()),
        None => ParsedLine::Blank,
    }
}

/// Splits `name (op version)` into its parts.
///
/// The second token is an opening bracket plus relation symbol and the third
/// is the version with its closing bracket; a lone second token is a raw
/// version without a symbol. Returns `None` when there is no name at all.
pub fn extract_dependency(text: &str) -> Option<DependencyFact> {
    let mut tokens = text.split_whitespace();
    let name = tokens.next()?.to_string();

    let constraint = match (tokens.next(), tokens.next()) {
        (Some(relation), Some(version)) => Some(VersionConstraint::new(
            relation.trim_start_matches('('),
            version.trim_end_matches(')'),
        )),
        (Some(version), None) => Some(VersionConstraint::new(
            "",
            version.trim_start_matches('(').trim_end_matches(')'),
        )),
        _ => None,
    };

    Some(DependencyFact { name, constraint })
}
