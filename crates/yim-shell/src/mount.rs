//! UI Mounter.

use tracing::info;
use yim_common::MountError;

use crate::host::{Component, UiHost};
use crate::MOUNT_ELEMENT_ID;

/// Mount `root` into the fixed host element.
///
/// A missing host element is fatal and is returned to the caller untouched.
pub fn mount_root<U: UiHost>(ui: &mut U, root: &dyn Component) -> Result<U::Mounted, MountError> {
    let mounted = ui.mount(MOUNT_ELEMENT_ID, root)?;
    info!(element = MOUNT_ELEMENT_ID, "root component mounted");
    Ok(mounted)
}
