use crate::build_order::domain::ResolvedList;
use crate::shared::Result;

/// BuildOrderFormatter port for rendering the aggregate build order
pub trait BuildOrderFormatter {
    /// Formats the resolved lists of all top-level packages
    ///
    /// # Arguments
    /// * `resolved` - Resolved lists in package-name order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, resolved: &[ResolvedList]) -> Result<String>;
}
