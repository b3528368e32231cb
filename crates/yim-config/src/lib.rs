//! Launcher configuration.
//!
//! TOML-based, with every section defaulted so an empty or partial file
//! still yields a usable config. The window title is deliberately not part
//! of the schema.
//!
//! ```rust,no_run
//! let config = yim_config::load_config(None).expect("failed to load config");
//! println!("{}x{}", config.window.width, config.window.height);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LauncherConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use yim_common::ConfigError;

/// Load the launcher config.
///
/// With `override_path` the file must exist; without it the platform default
/// location is used and a commented default file is created on first run.
/// Out-of-range values are logged and replaced by the defaults, so the
/// returned config always passes [`validation::validate`].
pub fn load_config(override_path: Option<&Path>) -> Result<LauncherConfig, ConfigError> {
    match override_path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
