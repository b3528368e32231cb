//! Desktop implementations of the bootstrap's host seams.
//!
//! The UI host is a wry WebView attached to the winit window. The window
//! runtime is a bridge that forwards requests to the event loop through its
//! proxy and waits for the loop to answer.

mod bridge;
mod webview;

pub use bridge::{HostEvent, ProxyRuntime};
pub use webview::{bounds_for_size, WebViewHost};
