/// ProgressReporter port for reporting progress during an analysis
///
/// This port abstracts user-facing progress output (e.g., to stderr).
/// Developer diagnostics go through `tracing` instead.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a fixed number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not abort the operation
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
