//! Launcher bootstrap.
//!
//! Mounts the root UI component into its host element, then spawns a
//! best-effort task that sets the native window title. The host UI framework,
//! the native window runtime and the diagnostic channel are injected through
//! the traits in [`host`], so the desktop binary and the tests share the same
//! startup path.

pub mod bootstrap;
pub mod document;
pub mod host;
pub mod mount;
pub mod title;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::{start, Startup};
pub use document::ShellDocument;
pub use host::{Component, DiagnosticSink, NativeWindow, TracingSink, UiHost, WindowRuntime};
pub use mount::mount_root;
pub use title::{TitleState, TitleUpdater};

/// Id of the element the root component is mounted into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Native window title applied once at startup.
pub const APP_TITLE: &str = "YimMenu V2 注入器";
