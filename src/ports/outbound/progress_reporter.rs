/// ProgressReporter port for reporting progress during a conversion run
///
/// Progress goes to a side channel (stderr) so it never mixes with the JSON
/// written to stdout.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports per-definition progress
    ///
    /// # Arguments
    /// * `current` - Number of definitions resolved so far
    /// * `total` - Number of definitions selected for this run
    /// * `message` - Optional message (usually the definition id)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning
    fn report_error(&self, message: &str);

    /// Reports completion of a stage
    fn report_completion(&self, message: &str);
}
