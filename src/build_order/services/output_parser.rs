use super::line_parser::{parse_line, DependencyFact, ParsedLine};
use crate::build_order::domain::{DependencyRecord, ParsedDependencies, RelationKind};
use std::collections::btree_map::Entry;

/// A skipped line, kept so the caller can report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number within the tool output
    pub line_number: usize,
    pub line: String,
    pub reason: String,
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {}: {} ({})",
            self.line_number, self.line, self.reason
        )
    }
}

/// Result of parsing the output of one tool invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOutput {
    /// First package name in the output: the canonical name of the queried package
    pub canonical_name: Option<String>,
    pub records: ParsedDependencies,
    pub warnings: Vec<ParseWarning>,
}

/// OutputParser service turning raw dependency tool output into records
///
/// The output is a sequence of package blocks. A non-indented name opens a
/// block; relation labels select the section; indented lines declare
/// dependencies of the open block.
pub struct OutputParser;

impl OutputParser {
    /// Parses the full line sequence of one invocation
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> ParsedOutput {
        lines
            .iter()
            .enumerate()
            .fold(ScanState::default(), |state, (index, line)| {
                state.step(index + 1, line.as_ref())
            })
            .finish()
    }
}

/// Fold state threaded through the scan
#[derive(Default)]
struct ScanState {
    current_kind: Option<RelationKind>,
    current: Option<(String, DependencyRecord)>,
    output: ParsedOutput,
}

impl ScanState {
    fn step(mut self, line_number: usize, line: &str) -> Self {
        match parse_line(line) {
            ParsedLine::Blank => {}
            ParsedLine::FlushMarker(name) => {
                self.flush();
                if self.output.canonical_name.is_none() {
                    self.output.canonical_name = Some(name.clone());
                }
                self.current = Some((name.clone(), DependencyRecord::new(name)));
                self.current_kind = None;
            }
            ParsedLine::SectionHeader { kind, inline } => {
                self.current_kind = Some(kind);
                if let Some(fact) = inline {
                    self.record(line_number, line, kind, fact);
                }
            }
            ParsedLine::Detail { kind, fact } => match kind.or(self.current_kind) {
                Some(kind) => self.record(line_number, line, kind, fact),
                None => self.warn(line_number, line, "dependency outside of any relation section"),
            },
            ParsedLine::Unparseable(reason) => self.warn(line_number, line, &reason),
        }
        self
    }

    fn record(&mut self, line_number: usize, line: &str, kind: RelationKind, fact: DependencyFact) {
        match self.current.as_mut() {
            Some((_, record)) => record.add_dependency(kind, fact.name, fact.constraint),
            None => self.warn(line_number, line, "dependency before any package name"),
        }
    }

    fn warn(&mut self, line_number: usize, line: &str, reason: &str) {
        self.output.warnings.push(ParseWarning {
            line_number,
            line: line.to_string(),
            reason: reason.to_string(),
        });
    }

    /// Moves the open record into the result, appending to an earlier
    /// block for the same package if the tool printed it twice.
    fn flush(&mut self) {
        if let Some((name, record)) = self.current.take() {
            match self.output.records.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(mut slot) => slot.get_mut().append(record),
            }
        }
    }

    fn finish(mut self) -> ParsedOutput {
        self.flush();
        self.output
    }
}
