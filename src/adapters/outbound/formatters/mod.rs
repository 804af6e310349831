/// Formatter adapters for resolved lists and dependency trees
mod json_formatter;
mod plain_text_formatter;
mod tree_formatter;

pub use json_formatter::JsonFormatter;
pub use plain_text_formatter::PlainTextFormatter;
pub use tree_formatter::TreeFormatter;
