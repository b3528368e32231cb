//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: creates the window, runs the launcher bootstrap, answers
//! host requests and ticks local async tasks.

mod core;
mod event_handler;
mod init;
mod placement;
mod shutdown;
mod tasks;

pub use core::LauncherApp;
