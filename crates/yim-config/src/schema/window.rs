//! Native window settings.

use serde::{Deserialize, Serialize};

/// Initial geometry and behavior of the launcher window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Logical width in pixels (valid range: 320-7680).
    pub width: u32,
    /// Logical height in pixels (valid range: 240-4320).
    pub height: u32,
    pub resizable: bool,
    /// Center the window on the primary monitor at startup.
    pub centered: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            resizable: true,
            centered: true,
        }
    }
}
