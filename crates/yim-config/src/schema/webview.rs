//! Embedded WebView settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewConfig {
    /// Enable the inspector (on by default in debug builds).
    pub devtools: bool,
    pub transparent: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            transparent: false,
        }
    }
}
