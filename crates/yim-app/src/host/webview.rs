//! UI host backed by a wry WebView.

use tracing::debug;
use winit::window::Window;
use wry::dpi::{LogicalPosition, PhysicalSize};
use wry::{WebView, WebViewBuilder};
use yim_common::MountError;
use yim_config::schema::WebViewConfig;
use yim_shell::{Component, ShellDocument, UiHost};

/// Mounts components into the shell document and shows the result in a
/// WebView filling `window`.
pub struct WebViewHost<'w> {
    window: &'w Window,
    document: ShellDocument,
    config: WebViewConfig,
}

impl<'w> WebViewHost<'w> {
    pub fn new(window: &'w Window, document: ShellDocument, config: WebViewConfig) -> Self {
        Self {
            window,
            document,
            config,
        }
    }
}

impl UiHost for WebViewHost<'_> {
    type Mounted = WebView;

    fn mount(&mut self, element_id: &str, root: &dyn Component) -> Result<WebView, MountError> {
        let html = self.document.mount_into(element_id, &root.render())?;

        let size = self.window.inner_size();
        let webview = WebViewBuilder::new()
            .with_html(html)
            .with_bounds(bounds_for_size(size.width, size.height))
            .with_devtools(self.config.devtools)
            .with_transparent(self.config.transparent)
            .build_as_child(self.window)
            .map_err(|e| MountError::WebView(e.to_string()))?;

        debug!(element_id, width = size.width, height = size.height, "WebView created");
        Ok(webview)
    }
}

/// Bounds covering a whole window of the given physical size.
pub fn bounds_for_size(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: PhysicalSize::new(width, height).into(),
    }
}
