/// Mock implementations for testing
mod mock_dependency_source;
mod mock_package_list_reader;
mod mock_progress_reporter;

pub use mock_dependency_source::MockDependencySource;
pub use mock_package_list_reader::MockPackageListReader;
pub use mock_progress_reporter::MockProgressReporter;
