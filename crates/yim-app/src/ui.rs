//! Bundled front-end: the shell page and the root component.

use yim_shell::{Component, ShellDocument};

const SHELL_HTML: &str = include_str!("../assets/index.html");
const ROOT_HTML: &str = include_str!("../assets/app.html");

/// The launcher's root component.
pub struct LauncherRoot;

impl Component for LauncherRoot {
    fn render(&self) -> String {
        ROOT_HTML.to_string()
    }
}

pub fn shell_document() -> ShellDocument {
    ShellDocument::new(SHELL_HTML)
}
