//! Title Updater: one best-effort attempt to set the native window title.

mod types;
mod updater;


pub use types::TitleState;
pub use updater::TitleUpdater;
