mod app_state;
mod cli;
mod host;
mod logging;
mod ui;

use winit::event_loop::EventLoop;
use yim_common::LauncherError;
use yim_config::LauncherConfig;

use crate::host::HostEvent;

fn main() -> yim_common::Result<()> {
    let args = cli::parse();

    // Logging first so config loading diagnostics are visible.
    let log = logging::init(args.log_level.as_deref());
    logging::install_panic_hook();

    tracing::info!("YimMenu launcher v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = yim_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        LauncherConfig::default()
    });
    log.apply_config_level(config.logging.level);

    let event_loop = EventLoop::<HostEvent>::with_user_event()
        .build()
        .map_err(|e| LauncherError::EventLoop(e.to_string()))?;
    let mut app = app_state::LauncherApp::new(config, event_loop.create_proxy())?;

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| LauncherError::EventLoop(e.to_string()))?;

    app.finish()?;
    tracing::info!("Shutdown complete");
    Ok(())
}
