//! Window runtime over the event-loop proxy.

use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::debug;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use yim_common::HostError;
use yim_shell::{NativeWindow, WindowRuntime};

/// Requests delivered to the event loop as user events.
#[derive(Debug)]
pub enum HostEvent {
    SetTitle {
        title: String,
        reply: oneshot::Sender<Result<(), HostError>>,
    },
}

/// Anything whose title the event loop can change.
pub trait TitleSurface {
    fn apply_title(&self, title: &str);
}

impl TitleSurface for Window {
    fn apply_title(&self, title: &str) {
        self.set_title(title);
    }
}

impl HostEvent {
    /// Answer the request against `surface`, or report the window as closed.
    pub fn resolve<S: TitleSurface + ?Sized>(self, surface: Option<&S>) {
        match self {
            HostEvent::SetTitle { title, reply } => {
                let result = match surface {
                    Some(surface) => {
                        surface.apply_title(&title);
                        Ok(())
                    }
                    None => Err(HostError::WindowClosed),
                };
                if reply.send(result).is_err() {
                    debug!("title requester went away before the reply");
                }
            }
        }
    }
}

/// Delivery of [`HostEvent`]s to the event loop.
pub trait EventSender: Clone {
    /// Returns `false` if the loop is gone.
    fn send(&self, event: HostEvent) -> bool;
}

impl EventSender for EventLoopProxy<HostEvent> {
    fn send(&self, event: HostEvent) -> bool {
        self.send_event(event).is_ok()
    }
}

/// [`WindowRuntime`] backed by the event loop.
#[derive(Clone)]
pub struct ProxyRuntime<S> {
    sender: S,
}

impl<S: EventSender> ProxyRuntime<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }
}

impl<S: EventSender> WindowRuntime for ProxyRuntime<S> {
    type Window = ProxyWindow<S>;

    fn current_window(&self) -> ProxyWindow<S> {
        ProxyWindow {
            sender: self.sender.clone(),
        }
    }
}

/// Handle to the event loop's window. Holds no reference to the window itself.
pub struct ProxyWindow<S> {
    sender: S,
}

#[async_trait(?Send)]
impl<S: EventSender> NativeWindow for ProxyWindow<S> {
    async fn set_title(&self, title: &str) -> Result<(), HostError> {
        let (reply, answer) = oneshot::channel();
        let event = HostEvent::SetTitle {
            title: title.to_string(),
            reply,
        };

        if !self.sender.send(event) {
            return Err(HostError::BridgeUnavailable("event loop closed".into()));
        }

        answer.await.map_err(|_| {
            HostError::BridgeUnavailable("event loop dropped the request".into())
        })?
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tokio::sync::mpsc;

    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        title: RefCell<Option<String>>,
    }

    impl TitleSurface for FakeSurface {
        fn apply_title(&self, title: &str) {
            *self.title.borrow_mut() = Some(title.to_string());
        }
    }

    impl EventSender for mpsc::UnboundedSender<HostEvent> {
        fn send(&self, event: HostEvent) -> bool {
            mpsc::UnboundedSender::send(self, event).is_ok()
        }
    }

    fn set_title_event(title: &str) -> (HostEvent, oneshot::Receiver<Result<(), HostError>>) {
        let (reply, rx) = oneshot::channel();
        let event = HostEvent::SetTitle {
            title: title.to_string(),
            reply,
        };
        (event, rx)
    }

    #[test]
    fn resolve_applies_title_to_live_window() {
        let surface = FakeSurface::default();
        let (event, mut rx) = set_title_event("YimMenu V2 注入器");

        event.resolve(Some(&surface));

        assert_eq!(surface.title.borrow().as_deref(), Some("YimMenu V2 注入器"));
        assert_eq!(rx.try_recv().unwrap(), Ok(()));
    }

    #[test]
    fn resolve_without_window_reports_closed() {
        let (event, mut rx) = set_title_event("x");

        event.resolve(None::<&FakeSurface>);

        assert_eq!(rx.try_recv().unwrap(), Err(HostError::WindowClosed));
    }

    #[test]
    fn resolve_tolerates_dropped_requester() {
        let surface = FakeSurface::default();
        let (event, rx) = set_title_event("x");
        drop(rx);

        event.resolve(Some(&surface));
        assert_eq!(surface.title.borrow().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn set_title_round_trips_through_the_loop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let window = ProxyRuntime::new(tx).current_window();
        let surface = FakeSurface::default();

        let request = window.set_title("YimMenu V2 注入器");
        let event_loop = async {
            let event = rx.recv().await.unwrap();
            event.resolve(Some(&surface));
        };
        let (result, ()) = tokio::join!(request, event_loop);

        assert_eq!(result, Ok(()));
        assert_eq!(surface.title.borrow().as_deref(), Some("YimMenu V2 注入器"));
    }

    #[tokio::test]
    async fn closed_loop_is_bridge_unavailable() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        let result = ProxyRuntime::new(tx).current_window().set_title("x").await;
        assert!(matches!(result, Err(HostError::BridgeUnavailable(_))));
    }

    #[tokio::test]
    async fn dropped_request_is_bridge_unavailable() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let window = ProxyRuntime::new(tx).current_window();

        let request = window.set_title("x");
        let event_loop = async {
            // The loop consumes the event without answering.
            drop(rx.recv().await);
        };
        let (result, ()) = tokio::join!(request, event_loop);

        assert!(matches!(result, Err(HostError::BridgeUnavailable(ref m)) if m.contains("dropped")));
    }

    #[tokio::test]
    async fn window_closed_reply_is_passed_through() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let window = ProxyRuntime::new(tx).current_window();

        let request = window.set_title("x");
        let event_loop = async {
            rx.recv().await.unwrap().resolve(None::<&FakeSurface>);
        };
        let (result, ()) = tokio::join!(request, event_loop);

        assert_eq!(result, Err(HostError::WindowClosed));
    }
}
