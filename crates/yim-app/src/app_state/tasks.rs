//! Cooperative scheduling of local tasks from the event loop.

use super::core::LauncherApp;

impl LauncherApp {
    /// Give every ready local task one poll, then hand control back to winit.
    ///
    /// Tasks are woken by host replies delivered as user events, and winit
    /// always calls `about_to_wait` after such events, so nothing stalls.
    pub(super) fn run_local_tasks(&self) {
        self.runtime
            .block_on(self.local.run_until(tokio::task::yield_now()));
    }
}
