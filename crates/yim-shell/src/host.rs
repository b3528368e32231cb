//! Seams to the external collaborators of the bootstrap.

use async_trait::async_trait;
use yim_common::{HostError, MountError};

/// A UI component that can render itself to markup.
pub trait Component {
    fn render(&self) -> String;
}

/// The host UI framework: attaches a component tree to a named element.
pub trait UiHost {
    /// Whatever keeps the mounted view alive.
    type Mounted;

    fn mount(&mut self, element_id: &str, root: &dyn Component)
        -> Result<Self::Mounted, MountError>;
}

/// The native window/shell runtime.
pub trait WindowRuntime {
    type Window: NativeWindow;

    /// Handle to the current window. Always available while the process runs.
    fn current_window(&self) -> Self::Window;
}

/// A native window handle. Only the title is reachable from the bootstrap.
#[async_trait(?Send)]
pub trait NativeWindow {
    async fn set_title(&self, title: &str) -> Result<(), HostError>;
}

/// Write-only sink for human-readable error reports.
pub trait DiagnosticSink {
    fn error(&self, message: &str);
}

/// Diagnostic sink backed by `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
