use crate::shared::Result;

/// DependencySource port for the external dependency listing tool
///
/// The tool is treated as a black box: it is queried once per package and
/// returns its report as text lines, the first being the canonical name of
/// the queried package.
pub trait DependencySource {
    /// Fetches the raw dependency report for one package
    ///
    /// # Errors
    /// Returns an error if the tool cannot be launched or exits unsuccessfully.
    /// Callers treat this as "no data for this package".
    fn fetch_dependencies(&self, package_name: &str) -> Result<Vec<String>>;

    /// Short description of the source for progress messages
    fn describe(&self) -> String;
}
