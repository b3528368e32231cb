//! Window placement helpers.

use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Top-left position that centers a window of `window` size on a monitor.
///
/// Windows larger than the monitor are pinned to its top-left corner.
pub(super) fn centered_position(
    monitor_origin: PhysicalPosition<i32>,
    monitor: PhysicalSize<u32>,
    window: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let offset = |outer: u32, inner: u32| i32::try_from(outer.saturating_sub(inner) / 2).unwrap_or(0);

    PhysicalPosition::new(
        monitor_origin.x + offset(monitor.width, window.width),
        monitor_origin.y + offset(monitor.height, window.height),
    )
}
