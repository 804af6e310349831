/// Process adapters running the external dependency tool
mod command_source;

pub use command_source::{CommandDependencySource, DEFAULT_TOOL};
