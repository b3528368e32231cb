use tokio::task::JoinHandle;
use tracing::debug;

use crate::host::{DiagnosticSink, NativeWindow, WindowRuntime};

use super::types::TitleState;

/// Sets the native window title exactly once.
///
/// Running consumes the updater, so a second attempt needs a new one.
/// Failures are reported on the diagnostic sink and never returned.
pub struct TitleUpdater<R, D> {
    runtime: R,
    diagnostics: D,
    title: String,
}

impl<R, D> TitleUpdater<R, D>
where
    R: WindowRuntime,
    D: DiagnosticSink,
{
    pub fn new(runtime: R, diagnostics: D, title: impl Into<String>) -> Self {
        let title = title.into();
        debug_assert!(!title.is_empty(), "window title must not be empty");
        Self {
            runtime,
            diagnostics,
            title,
        }
    }

    /// Acquire the current window and request the title change.
    pub async fn run(self) -> TitleState {
        let window = self.runtime.current_window();

        match window.set_title(&self.title).await {
            Ok(()) => {
                debug!(title = %self.title, "window title set");
                TitleState::Succeeded
            }
            Err(e) => {
                self.diagnostics
                    .error(&format!("failed to set window title: {e}"));
                TitleState::FailedReported
            }
        }
    }
}

impl<R, D> TitleUpdater<R, D>
where
    R: WindowRuntime + 'static,
    R::Window: 'static,
    D: DiagnosticSink + 'static,
{
    /// Spawn [`run`](Self::run) on the current `LocalSet` and return at once.
    ///
    /// # Panics
    ///
    /// Panics when called outside a `tokio::task::LocalSet` context.
    pub fn spawn(self) -> JoinHandle<TitleState> {
        tokio::task::spawn_local(self.run())
    }
}
