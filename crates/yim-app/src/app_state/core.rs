//! LauncherApp struct definition and constructor.

use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use wry::WebView;
use yim_common::LauncherError;
use yim_config::LauncherConfig;

use crate::host::HostEvent;

/// Top-level application state.
pub struct LauncherApp {
    pub(super) config: LauncherConfig,
    pub(super) proxy: EventLoopProxy<HostEvent>,

    // Declared before `window`: the WebView must go first.
    pub(super) webview: Option<WebView>,
    pub(super) window: Option<Window>,

    // Single-threaded executor for the bootstrap's background tasks,
    // ticked from `about_to_wait`.
    pub(super) local: LocalSet,
    pub(super) runtime: Runtime,

    // Fatal startup error, surfaced once the loop exits.
    pub(super) fatal: Option<LauncherError>,
}

impl LauncherApp {
    pub fn new(
        config: LauncherConfig,
        proxy: EventLoopProxy<HostEvent>,
    ) -> Result<Self, LauncherError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            config,
            proxy,
            webview: None,
            window: None,
            local: LocalSet::new(),
            runtime,
            fatal: None,
        })
    }

    /// Consume the app after the event loop returns, yielding any fatal
    /// startup error.
    pub fn finish(mut self) -> Result<(), LauncherError> {
        match self.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
