//! Config validation.
//!
//! Collects every range violation into a single `ConfigError`.

mod helpers;


use yim_common::ConfigError;

use crate::schema::LauncherConfig;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LauncherConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &LauncherConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
}
