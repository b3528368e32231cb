use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure to attach the root component to its host element.
///
/// Always fatal at startup: the launcher has nothing to show without a
/// mount point.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("host element '#{0}' not found")]
    ElementNotFound(String),

    #[error("webview error: {0}")]
    WebView(String),
}

/// Failure reported by the native window runtime for a window request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("window closed")]
    WindowClosed,

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("native bridge unavailable: {0}")]
    BridgeUnavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("event loop error: {0}")]
    EventLoop(String),

    #[error("{0}")]
    Other(String),
}
