//! build-order - build order computation from apt-rdepends output
//!
//! This library collects the dependency reports of a list of Debian packages,
//! merges them into one inventory, walks a dependency tree per top-level
//! package and flattens each tree into a deepest-first build order.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`build_order`): Pure models and algorithms, no I/O
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use build_order::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let package_list_reader = FileSystemReader::new();
//! let dependency_source = CommandDependencySource::new("apt-rdepends")?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateBuildOrderUseCase::new(
//!     package_list_reader,
//!     dependency_source,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = BuildOrderRequest::new(PathBuf::from("pkg.list"), vec![], true);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let output = PlainTextFormatter::new().format(&response.resolved)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod build_order;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, PlainTextFormatter, TreeFormatter,
    };
    pub use crate::adapters::outbound::process::CommandDependencySource;
    pub use crate::application::dto::{BuildOrderRequest, BuildOrderResponse, OutputFormat};
    pub use crate::application::use_cases::GenerateBuildOrderUseCase;
    pub use crate::build_order::domain::{
        DependencyRecord, DependencyTree, Inventory, RelationKind, ResolvedList, TreeEntry,
        VersionConstraint,
    };
    pub use crate::build_order::services::{IgnoreList, OutputParser, Resolver, TreeBuilder};
    pub use crate::ports::outbound::{
        BuildOrderFormatter, DependencySource, OutputPresenter, PackageListReader,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
