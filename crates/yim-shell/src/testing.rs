//! Fakes for the host seams.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use yim_common::{HostError, MountError};

use crate::host::{Component, DiagnosticSink, NativeWindow, UiHost, WindowRuntime};

/// Root component with fixed markup.
pub struct StaticComponent(pub &'static str);

impl Component for StaticComponent {
    fn render(&self) -> String {
        self.0.to_string()
    }
}

/// A UI host with a known set of elements that records every mount.
#[derive(Default)]
pub struct FakeUiHost {
    pub elements: Vec<String>,
    pub mounts: Vec<(String, String)>,
}

impl FakeUiHost {
    pub fn with_element(id: &str) -> Self {
        Self {
            elements: vec![id.to_string()],
            mounts: Vec::new(),
        }
    }
}

impl UiHost for FakeUiHost {
    type Mounted = usize;

    fn mount(&mut self, element_id: &str, root: &dyn Component) -> Result<usize, MountError> {
        if !self.elements.iter().any(|e| e == element_id) {
            return Err(MountError::ElementNotFound(element_id.to_string()));
        }
        self.mounts.push((element_id.to_string(), root.render()));
        Ok(self.mounts.len())
    }
}

/// Shared view of what a [`FakeRuntime`] observed.
#[derive(Default)]
pub struct WindowLog {
    pub lookups: usize,
    pub attempts: Vec<String>,
    pub title: Option<String>,
}

/// Window runtime whose `set_title` answers with a scripted result.
#[derive(Clone)]
pub struct FakeRuntime {
    pub log: Rc<RefCell<WindowLog>>,
    pub outcome: Result<(), HostError>,
}

impl FakeRuntime {
    pub fn succeeding() -> Self {
        Self {
            log: Rc::default(),
            outcome: Ok(()),
        }
    }

    pub fn failing(err: HostError) -> Self {
        Self {
            log: Rc::default(),
            outcome: Err(err),
        }
    }
}

pub struct FakeWindow {
    log: Rc<RefCell<WindowLog>>,
    outcome: Result<(), HostError>,
}

impl WindowRuntime for FakeRuntime {
    type Window = FakeWindow;

    fn current_window(&self) -> FakeWindow {
        self.log.borrow_mut().lookups += 1;
        FakeWindow {
            log: Rc::clone(&self.log),
            outcome: self.outcome.clone(),
        }
    }
}

#[async_trait(?Send)]
impl NativeWindow for FakeWindow {
    async fn set_title(&self, title: &str) -> Result<(), HostError> {
        // Suspend once so callers observe a genuinely pending request.
        tokio::task::yield_now().await;

        let mut log = self.log.borrow_mut();
        log.attempts.push(title.to_string());
        if self.outcome.is_ok() {
            log.title = Some(title.to_string());
        }
        self.outcome.clone()
    }
}

/// Diagnostic sink that keeps every message.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl DiagnosticSink for RecordingSink {
    fn error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
