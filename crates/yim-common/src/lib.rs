pub mod errors;

pub use errors::{ConfigError, HostError, LauncherError, MountError};

pub type Result<T> = std::result::Result<T, LauncherError>;
