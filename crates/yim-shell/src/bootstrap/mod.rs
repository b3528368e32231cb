//! Startup sequence: mount the UI, then fire off the title update.

use tokio::task::JoinHandle;
use yim_common::MountError;

use crate::host::{Component, DiagnosticSink, UiHost, WindowRuntime};
use crate::mount::mount_root;
use crate::title::{TitleState, TitleUpdater};
use crate::APP_TITLE;


/// What a successful start leaves behind.
pub struct Startup<M> {
    /// The mounted view; dropping it may tear the UI down.
    pub mounted: M,
    /// The detached title update. Dropping the handle does not cancel it.
    pub title_task: JoinHandle<TitleState>,
}

/// Run the launcher bootstrap.
///
/// Mounts `root` synchronously, then spawns the title update on the current
/// `LocalSet` and returns without waiting for it. Only a mount failure is
/// returned; the outcome of the title update never reaches the caller.
///
/// # Panics
///
/// Panics when called outside a `tokio::task::LocalSet` context.
pub fn start<U, R, D>(
    ui: &mut U,
    root: &dyn Component,
    runtime: R,
    diagnostics: D,
) -> Result<Startup<U::Mounted>, MountError>
where
    U: UiHost,
    R: WindowRuntime + 'static,
    R::Window: 'static,
    D: DiagnosticSink + 'static,
{
    let mounted = mount_root(ui, root)?;
    let title_task = TitleUpdater::new(runtime, diagnostics, APP_TITLE).spawn();

    Ok(Startup {
        mounted,
        title_task,
    })
}
