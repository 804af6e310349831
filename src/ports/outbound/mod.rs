/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, processes, console).
pub mod dependency_source;
pub mod formatter;
pub mod output_presenter;
pub mod package_list_reader;
pub mod progress_reporter;

pub use dependency_source::DependencySource;
pub use formatter::BuildOrderFormatter;
pub use output_presenter::OutputPresenter;
pub use package_list_reader::PackageListReader;
pub use progress_reporter::ProgressReporter;
