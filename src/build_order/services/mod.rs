mod ignore_list;
pub mod line_parser;
mod output_parser;
mod resolver;
mod tree_builder;

pub use ignore_list::{IgnoreList, DEFAULT_IGNORED_PACKAGES};
pub use line_parser::{parse_line, DependencyFact, ParsedLine};
pub use output_parser::{OutputParser, ParseWarning, ParsedOutput};
pub use resolver::Resolver;
pub use tree_builder::{TreeBuilder, MAX_TREE_DEPTH};
