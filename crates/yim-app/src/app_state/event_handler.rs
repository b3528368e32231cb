//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::host::{bounds_for_size, HostEvent};

use super::core::LauncherApp;

impl ApplicationHandler<HostEvent> for LauncherApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.fatal.is_some() {
            return;
        }

        if let Err(e) = self.initialize(event_loop) {
            tracing::error!("Startup failed: {e}");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: HostEvent) {
        event.resolve(self.window.as_ref());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds(size.width, size.height);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.run_local_tasks();
    }
}

impl LauncherApp {
    fn sync_webview_bounds(&self, width: u32, height: u32) {
        if let Some(ref webview) = self.webview {
            if let Err(e) = webview.set_bounds(bounds_for_size(width, height)) {
                tracing::warn!("Failed to resize webview: {e}");
            }
        }
    }
}
