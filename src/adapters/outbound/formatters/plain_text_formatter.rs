use crate::build_order::domain::ResolvedList;
use crate::build_order::services::Resolver;
use crate::ports::outbound::BuildOrderFormatter;
use crate::shared::Result;

/// PlainTextFormatter adapter: one entry per line, each line newline-terminated
///
/// This is the format of the `.resolved` files and the default aggregate file.
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders one resolved list
    pub fn format_list(&self, resolved: &ResolvedList) -> String {
        render_lines(resolved.lines())
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildOrderFormatter for PlainTextFormatter {
    fn format(&self, resolved: &[ResolvedList]) -> Result<String> {
        Ok(render_lines(&Resolver::concatenate(resolved)))
    }
}

fn render_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}
