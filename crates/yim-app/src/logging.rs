//! Tracing setup and panic reporting.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use yim_config::LogLevel;

/// Level used until the config says otherwise.
const DEFAULT_DIRECTIVE: &str = "info";

/// Handle to the installed subscriber's filter.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    /// Set when `--log-level` was given; the config level is then ignored.
    pinned: bool,
}

impl LogHandle {
    /// Switch to the config's level unless the CLI already chose one.
    pub fn apply_config_level(&self, level: LogLevel) {
        if self.pinned {
            return;
        }
        let (filter, _) = build_filter(level.as_directive());
        if let Err(e) = self.filter.reload(filter) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }
}

/// Install the global subscriber. `RUST_LOG` still applies on top.
///
/// Runs before config loading so the loader's own diagnostics are visible.
pub fn init(cli_directive: Option<&str>) -> LogHandle {
    let requested = cli_directive.unwrap_or(DEFAULT_DIRECTIVE);
    let (filter, valid) = build_filter(requested);
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    if !valid {
        tracing::warn!("Invalid log level '{requested}', falling back to {DEFAULT_DIRECTIVE}");
    }

    LogHandle {
        filter: handle,
        pinned: cli_directive.is_some(),
    }
}

/// Build the filter for `directive`; the flag is `false` if it was rejected.
fn build_filter(directive: &str) -> (EnvFilter, bool) {
    let parsed = parse_directive(directive);
    let valid = parsed.is_some();
    let directive = parsed.unwrap_or_else(|| LevelFilter::INFO.into());
    (EnvFilter::from_default_env().add_directive(directive), valid)
}

/// Accept a bare level (`debug`) or a `target=level` directive.
///
/// A bare word that is not a level would otherwise parse as a target name
/// and silently match nothing.
fn parse_directive(directive: &str) -> Option<Directive> {
    let directive = directive.trim();
    if directive.parse::<LevelFilter>().is_ok() || directive.contains('=') {
        directive.parse().ok()
    } else {
        None
    }
}

/// Log panics through tracing before the default hook prints them.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("launcher panicked: {info}");
        default_hook(info);
    }));
}
