//! Window creation and the launcher bootstrap.

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;
use yim_common::LauncherError;
use yim_shell::TracingSink;

use crate::host::{ProxyRuntime, WebViewHost};
use crate::ui::{shell_document, LauncherRoot};

use super::core::LauncherApp;
use super::placement::centered_position;

impl LauncherApp {
    /// Create the window, mount the UI and spawn the title update.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), LauncherError> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(env!("CARGO_PKG_NAME"))
            .with_inner_size(LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ))
            .with_resizable(window_config.resizable)
            .with_visible(false);

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| LauncherError::Other(format!("failed to create window: {e}")))?;

        if window_config.centered {
            if let Some(monitor) = window.current_monitor() {
                window.set_outer_position(centered_position(
                    monitor.position(),
                    monitor.size(),
                    window.outer_size(),
                ));
            }
        }

        let mut ui = WebViewHost::new(&window, shell_document(), self.config.webview.clone());
        let runtime = ProxyRuntime::new(self.proxy.clone());

        let startup = {
            let _runtime = self.runtime.enter();
            let _local = self.local.enter();
            yim_shell::start(&mut ui, &LauncherRoot, runtime, TracingSink)?
        };
        drop(ui);
        // The title update runs detached; its outcome is logged by the task.
        drop(startup.title_task);

        window.set_visible(true);
        self.webview = Some(startup.mounted);
        self.window = Some(window);
        tracing::info!("Window created and UI mounted");
        Ok(())
    }
}
