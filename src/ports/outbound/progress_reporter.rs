/// ProgressReporter port for user-facing progress and warnings
///
/// Everything the tool tells the user while it runs goes through this port,
/// keeping stdout free for the optional tree print.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports per-package progress while the dependency tool runs
    ///
    /// # Arguments
    /// * `current` - Number of packages processed so far
    /// * `total` - Number of packages in the list
    /// * `message` - Optional message, usually the package name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem: a failed tool call, a skipped line,
    /// a truncated tree
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
