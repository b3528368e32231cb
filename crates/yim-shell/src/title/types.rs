/// Outcome of a title update.
///
/// The earlier stages are carried by the types: an unrun [`TitleUpdater`]
/// has not started, and a pending task handle is still running.
///
/// [`TitleUpdater`]: super::TitleUpdater
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleState {
    Succeeded,
    /// The host reported a failure and it went to the diagnostic sink.
    FailedReported,
}
