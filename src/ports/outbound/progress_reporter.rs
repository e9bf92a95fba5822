/// ProgressReporter port for operator-facing run output
///
/// Pipeline stages report through this port (stderr in production) so
/// that stdout stays free for the payload during dry runs.
pub trait ProgressReporter {
    /// Reports a stage message
    fn report(&self, message: &str);

    /// Reports per-namespace resolution progress
    ///
    /// # Arguments
    /// * `current` - Namespaces resolved so far
    /// * `total` - Namespaces discovered
    /// * `namespace` - Namespace that just completed, if any
    fn report_progress(&self, current: usize, total: usize, namespace: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of a stage
    fn report_completion(&self, message: &str);
}
