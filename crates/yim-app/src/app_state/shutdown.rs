//! Teardown on window close.

use super::core::LauncherApp;

impl LauncherApp {
    /// Release the WebView, then the window it is attached to.
    ///
    /// Title requests that arrive afterwards are answered with
    /// `HostError::WindowClosed`.
    pub(super) fn shutdown(&mut self) {
        self.webview = None;
        self.window = None;
        tracing::info!("Window closed");
    }
}
